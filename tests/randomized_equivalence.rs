use imagesearch::{
    ExactMatcher, Kernel, Matcher, PixelBuffer, Point, Rect, Searchable, ToleranceMatcher,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PALETTE: [[u8; 4]; 3] = [[0, 0, 0, 255], [200, 10, 40, 255], [200, 10, 41, 255]];

fn random_palette_image(rng: &mut StdRng, width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |_, _| {
        let mut px = PALETTE[rng.random_range(0..PALETTE.len())];
        // Alpha is ignored by exact matching and by opaque tolerance needles.
        px[3] = rng.random();
        px
    })
}

fn row_major_before(a: Point, b: Point) -> bool {
    (a.y, a.x) <= (b.y, b.x)
}

#[test]
fn exact_needle_finds_itself() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let width = rng.random_range(1..8);
        let height = rng.random_range(1..8);
        let needle = PixelBuffer::from_fn(width, height, |_, _| rng.random());
        let matcher = ExactMatcher::new(&needle);
        assert_eq!(
            matcher.search_in(needle.view()),
            Rect::new(0, 0, width, height)
        );
    }
}

#[test]
fn zero_tolerance_agrees_with_exact_for_opaque_needles() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..200 {
        let width = rng.random_range(1..4);
        let height = rng.random_range(1..4);
        let mut needle = random_palette_image(&mut rng, width, height);
        for y in 0..height {
            for x in 0..width {
                needle.pixel_mut(x, y).unwrap()[3] = 255;
            }
        }
        let hay_w = rng.random_range(0..12);
        let hay_h = rng.random_range(0..12);
        let haystack = random_palette_image(&mut rng, hay_w, hay_h);

        let exact = ExactMatcher::new(&needle);
        let tolerant = ToleranceMatcher::new(&needle, 0);
        let view = haystack.view();

        assert_eq!(exact.search_in(view), tolerant.search_in(view));
        assert_eq!(exact.search_all_in(view), tolerant.search_all_in(view));
        assert_eq!(
            Matcher::new(&needle, 0).search_in(view),
            Matcher::with_tolerance(&needle, 0).search_in(view)
        );
    }
}

#[test]
fn deviations_within_tolerance_match_and_one_more_does_not() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let tolerance: u8 = rng.random_range(1..=100);
        let width = rng.random_range(1..6);
        let height = rng.random_range(1..6);
        let needle = PixelBuffer::from_fn(width, height, |_, _| {
            [rng.random(), rng.random(), rng.random(), 255]
        });
        let matcher = ToleranceMatcher::new(&needle, tolerance);

        let x0 = rng.random_range(0..6);
        let y0 = rng.random_range(0..6);
        let mut haystack = PixelBuffer::from_fn(width + 8, height + 8, |_, _| rng.random());
        let t = tolerance as i32;
        for y in 0..height {
            for x in 0..width {
                let [r, g, b, _] = needle.pixel(x, y).unwrap();
                let alpha = rng.random();
                let mut jitter = |v: u8| (v as i32 + rng.random_range(-t..=t)).clamp(0, 255) as u8;
                let px = [jitter(r), jitter(g), jitter(b), alpha];
                haystack.put_pixel(x0 + x, y0 + y, px);
            }
        }

        assert!(matcher.matches_at(haystack.view(), x0, y0));
        let found = matcher.search_in(haystack.view());
        assert!(!found.is_empty());
        assert!(row_major_before(found.min, Point::new(x0, y0)));

        let (px, py) = (rng.random_range(0..width), rng.random_range(0..height));
        let c = rng.random_range(0..3);
        let orig = needle.pixel(px, py).unwrap()[c] as i32;
        let pushed = if orig + t + 1 <= 255 {
            orig + t + 1
        } else {
            orig - t - 1
        };
        let mut bad = haystack.pixel(x0 + px, y0 + py).unwrap();
        bad[c] = pushed as u8;
        haystack.put_pixel(x0 + px, y0 + py, bad);
        assert!(!matcher.matches_at(haystack.view(), x0, y0));
    }
}

#[test]
fn search_all_starts_with_search_in() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let needle = random_palette_image(&mut rng, 2, 2);
        let haystack = random_palette_image(&mut rng, 10, 9);
        let tolerance = rng.random_range(0..3);
        let matcher = Matcher::new(&needle, tolerance);

        let first = matcher.search_in(haystack.view());
        let all = matcher.search_all_in(haystack.view());
        assert_eq!(all.first().copied().unwrap_or(Rect::ZERO), first);
        assert!(all
            .windows(2)
            .all(|w| row_major_before(w[0].min, w[1].min) && w[0] != w[1]));
        for rect in &all {
            assert!(matcher.matches_at(haystack.view(), rect.min.x, rect.min.y));
        }
    }
}
