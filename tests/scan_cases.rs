//! Data-driven scan cases described as ASCII art.
//!
//! Each character is one pixel: `.` black, `a` red, `b` green, `B` green off
//! by 3 on the G channel, `?` fully transparent black.

use imagesearch::{Matcher, PixelBuffer, Rect, Searchable};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    needle: Vec<String>,
    haystack: Vec<String>,
    #[serde(default)]
    tolerance: u8,
    expected: Option<[usize; 4]>,
}

#[derive(Debug, Deserialize)]
struct Cases {
    cases: Vec<Case>,
}

fn colour(c: char) -> [u8; 4] {
    match c {
        '.' => [0, 0, 0, 255],
        'a' => [200, 40, 40, 255],
        'b' => [40, 200, 40, 255],
        'B' => [40, 203, 40, 255],
        '?' => [0, 0, 0, 0],
        other => panic!("unknown pixel character {other:?}"),
    }
}

fn parse_art(rows: &[String]) -> PixelBuffer {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    assert!(rows.iter().all(|row| row.chars().count() == width));
    let grid: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    PixelBuffer::from_fn(width, height, |x, y| colour(grid[y][x]))
}

fn load_cases() -> Cases {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/scan_cases.json");
    let text = fs::read_to_string(&path).expect("Failed to read scan cases");
    serde_json::from_str(&text).expect("Failed to parse scan cases")
}

#[test]
fn scan_cases_match_expected_rects() {
    let cases = load_cases();
    assert!(!cases.cases.is_empty());

    for case in &cases.cases {
        let needle = parse_art(&case.needle);
        let haystack = parse_art(&case.haystack);
        let matcher = Matcher::new(&needle, case.tolerance);

        let expected = case
            .expected
            .map_or(Rect::ZERO, |[x0, y0, x1, y1]| Rect::new(x0, y0, x1, y1));
        let found = matcher.search_in(haystack.view());
        assert_eq!(found, expected, "case {}", case.name);
        assert_eq!(
            matcher.find_in(haystack.view()),
            expected.non_empty(),
            "case {}",
            case.name
        );
    }
}
