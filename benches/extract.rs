// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use books_scrape::{analysis, specs::catalog};

const BASE: &str = "https://books.toscrape.com/";

/// The two-book fixture repeated into a 20-listing page, roughly the size of the live one.
fn load_sample() -> String {
    let doc = include_str!("../tests/fixtures/catalog_two_books.html");
    let start = doc.find("<li").expect("fixture has listings");
    let end = doc.rfind("</li>").expect("fixture has listings") + "</li>".len();
    let listings = doc[start..end].repeat(10);
    format!("{}{}{}", &doc[..start], listings, &doc[end..])
}

fn bench_extract(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("extract_catalog_page", |b| {
        b.iter(|| {
            let books = catalog::extract_books(black_box(&doc), BASE);
            black_box(books.len())
        })
    });

    let books = catalog::extract_books(&doc, BASE);
    c.bench_function("tally_ratings", |b| {
        b.iter(|| black_box(analysis::tally(black_box(&books))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
