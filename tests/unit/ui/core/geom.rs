use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    // Outside.
    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn intersect_clips_to_overlap() {
    let a = Rect::new(0, 0, 10, 5);
    let b = Rect::new(6, 3, 10, 10);
    assert_eq!(a.intersect(b), Rect::new(6, 3, 4, 2));
    assert!(a.intersect(Rect::new(20, 0, 3, 3)).is_empty());
}

#[test]
fn shrink_collapses_small_rects() {
    assert_eq!(Rect::new(2, 2, 10, 6).shrink(1), Rect::new(3, 3, 8, 4));
    assert!(Rect::new(0, 0, 2, 2).shrink(1).is_empty());
}

#[test]
fn split_top_and_bottom_saturate() {
    let r = Rect::new(0, 0, 20, 10);
    let (top, rest) = r.split_top(1);
    assert_eq!(top, Rect::new(0, 0, 20, 1));
    assert_eq!(rest, Rect::new(0, 1, 20, 9));

    let (rest, bottom) = r.split_bottom(1);
    assert_eq!(rest, Rect::new(0, 0, 20, 9));
    assert_eq!(bottom, Rect::new(0, 9, 20, 1));

    let (top, rest) = Rect::new(0, 0, 5, 1).split_top(3);
    assert_eq!(top.h, 1);
    assert!(rest.is_empty());
}

#[test]
fn columns_clip_scrolled_slices() {
    let track = Rect::new(4, 2, 30, 8);
    assert_eq!(track.columns(0, 10), Rect::new(4, 2, 10, 8));
    assert_eq!(track.columns(-5, 5), Rect::new(4, 2, 5, 8));
    assert_eq!(track.columns(25, 40), Rect::new(29, 2, 5, 8));
    assert!(track.columns(-20, -10).is_empty());
    assert!(track.columns(30, 40).is_empty());
}
