//! Performance benchmarks for repotree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use repotree::test_utils::TestTree;
use repotree::{TreeNode, classify, scan, write_json};

const SAMPLE_NAMES: &[&str] = &[
    "nginx-1.24.0-r0.apk",
    "nginx-openrc.apk",
    "APKINDEX.tar.gz",
    "archive.tar.bz2",
    "repo.rsa.pub",
    "README",
    "index.json",
];

fn create_tree_with_files(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        let dir = format!("dir_{:02}", i / 50);
        let name = SAMPLE_NAMES[i % SAMPLE_NAMES.len()];
        tree.add_sized(&format!("{}/{}_{}", dir, i, name), i % 1024);
    }
    tree
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for name in SAMPLE_NAMES {
        group.bench_function(*name, |b| b.iter(|| classify(black_box(name))));
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let small = create_tree_with_files(10);
    group.bench_function("small_tree_10_files", |b| {
        b.iter(|| scan(black_box(small.path())))
    });

    let medium = create_tree_with_files(100);
    group.bench_function("medium_tree_100_files", |b| {
        b.iter(|| scan(black_box(medium.path())))
    });

    let large = create_tree_with_files(1000);
    group.bench_function("large_tree_1000_files", |b| {
        b.iter(|| scan(black_box(large.path())))
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let tree = create_tree_with_files(1000);
    let node: TreeNode = scan(tree.path()).unwrap();

    c.bench_function("serialize_1000_files", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(64 * 1024);
            write_json(black_box(&node), &mut buf).unwrap();
            buf
        })
    });
}

criterion_group!(benches, bench_classify, bench_scan, bench_serialize);
criterion_main!(benches);
