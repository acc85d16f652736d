// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the range query over a full feed.
//!
//! Measures the performance of:
//! - Decoding the feed body
//! - Filtering, sorting and capping records for a date range
//! - Projecting the shown records into gallery cards

use apod_gallery::application::gallery::card;
use apod_gallery::application::query::{self, RangeSelector};
use apod_gallery::infrastructure::http::decode_feed;
use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Roughly thirty years of daily entries, newest last.
const FEED_DAYS: u64 = 11_000;

fn synthetic_feed() -> String {
    let first = NaiveDate::from_ymd_opt(1995, 6, 16).expect("valid date");
    let entries: Vec<String> = (0..FEED_DAYS)
        .filter_map(|offset| first.checked_add_days(Days::new(offset)))
        .enumerate()
        .map(|(i, date)| {
            let date = date.format("%Y-%m-%d");
            if i % 7 == 0 {
                format!(
                    r#"{{"date":"{date}","title":"Video {i}","media_type":"video","url":"https://www.youtube.com/embed/id{i}?rel=0"}}"#
                )
            } else {
                format!(
                    r#"{{"date":"{date}","title":"Image {i}","explanation":"Entry {i}","media_type":"image","url":"https://apod.example/{i}.jpg","hdurl":"https://apod.example/{i}_hd.jpg"}}"#
                )
            }
        })
        .collect();
    format!("[{}]", entries.join(","))
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_engine");
    let body = synthetic_feed();

    group.bench_function("decode_feed", |b| {
        b.iter(|| black_box(decode_feed(black_box(body.as_bytes()))));
    });

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_engine");
    let records = decode_feed(synthetic_feed().as_bytes()).expect("synthetic feed decodes");

    let narrow = RangeSelector::resolve(Some("2010-03-01"), Some("2010-03-09")).expect("range");
    let wide = RangeSelector::resolve(Some("1995-01-01"), Some("2030-12-31")).expect("range");

    group.bench_function("query_nine_days", |b| {
        b.iter(|| black_box(query::query(black_box(&records), &narrow)));
    });

    group.bench_function("query_whole_feed", |b| {
        b.iter(|| black_box(query::query(black_box(&records), &wide)));
    });

    group.bench_function("query_and_project", |b| {
        b.iter(|| {
            let outcome = query::query(black_box(&records), &narrow);
            black_box(card::project(outcome.shown()))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_query);
criterion_main!(benches);
