//! Benchmarks for navigation resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lk_nav::{NavItem, NavLink, SidebarGroup, SidebarMap, SiteNavigation};

/// Build a site with `sections` top-level sections of `pages` pages each.
fn create_site(sections: usize, pages: usize) -> SiteNavigation {
    let mut nav = Vec::with_capacity(sections);
    let mut sidebar = SidebarMap::new();

    for s in 0..sections {
        let prefix = format!("/section-{s}/");
        nav.push(
            NavItem::new(
                format!("Section {s}"),
                format!("{prefix}page-0"),
                Some(prefix.as_str()),
            )
            .unwrap(),
        );

        let links = (0..pages)
            .map(|p| NavLink::new(format!("Page {p}"), format!("{prefix}page-{p}")).unwrap())
            .collect();
        let group = SidebarGroup::new(format!("Group {s}"), links).unwrap();
        sidebar.insert(&prefix, vec![group]).unwrap();
    }

    SiteNavigation::new(nav, sidebar, None).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for sections in [5, 50] {
        let site = create_site(sections, 20);
        let hit = format!("/section-{}/page-10", sections - 1);

        group.bench_with_input(BenchmarkId::new("hit", sections), &hit, |b, path| {
            b.iter(|| site.resolve(path));
        });
        group.bench_with_input(
            BenchmarkId::new("miss", sections),
            &"/unknown/page",
            |b, path| b.iter(|| site.resolve(path)),
        );
    }

    group.finish();
}

fn bench_active_nav(c: &mut Criterion) {
    let site = create_site(50, 20);

    c.bench_function("active_nav", |b| {
        b.iter(|| site.active_nav("/section-49/page-19.html"));
    });
}

criterion_group!(benches, bench_resolve, bench_active_nav);
criterion_main!(benches);
