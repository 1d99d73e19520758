use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Mod;

fn render(width: u16, height: u16, paint: impl FnOnce(&mut Painter)) -> TestBackend {
    let mut painter = Painter::new();
    paint(&mut painter);
    let mut backend = TestBackend::new(width, height);
    backend.draw(Rect::new(0, 0, width, height), painter.cmds());
    backend
}

#[test]
fn border_draws_box_corners() {
    let backend = render(6, 3, |p| p.border(Rect::new(0, 0, 6, 3), Style::default()));
    let buf = backend.buffer();
    assert_eq!(buf.row_text(0), "┌────┐");
    assert_eq!(buf.row_text(1), "│    │");
    assert_eq!(buf.row_text(2), "└────┘");
}

#[test]
fn text_is_clipped_to_rect() {
    let clip = Rect::new(1, 0, 4, 1);
    let style = Style::default().add_mod(Mod::BOLD);
    let backend = render(8, 1, |p| p.text_clipped(Pos::new(1, 0), "Wat Arun", style, clip));
    let buf = backend.buffer();
    assert_eq!(buf.row_text(0), " Wat    ");
    assert_eq!(buf.cell(1, 0).map(|c| c.style), Some(style));
}

#[test]
fn text_outside_clip_rows_is_dropped() {
    let clip = Rect::new(0, 1, 8, 1);
    let backend = render(8, 2, |p| p.text_clipped(Pos::new(0, 0), "hidden", Style::default(), clip));
    assert_eq!(backend.buffer().row_text(0), "        ");
}

#[test]
fn wide_glyphs_are_not_split() {
    let clip = Rect::new(0, 0, 3, 1);
    let backend = render(4, 1, |p| p.text_clipped(Pos::new(0, 0), "ab中", Style::default(), clip));
    assert_eq!(backend.buffer().row_text(0), "ab  ");

    let backend = render(4, 1, |p| p.text_clipped(Pos::new(0, 0), "a中", Style::default(), clip));
    let buf = backend.buffer();
    assert_eq!(buf.cell(1, 0).map(|c| c.symbol.as_str()), Some("中"));
    assert_eq!(buf.cell(2, 0).map(|c| c.symbol.as_str()), Some(" "));
}

#[test]
fn hline_repeats_symbol() {
    let backend = render(5, 1, |p| p.hline(Pos::new(1, 0), 3, '─', Style::default()));
    assert_eq!(backend.buffer().row_text(0), " ─── ");
}

#[test]
fn fill_rect_resets_cells() {
    let backend = render(3, 1, |p| {
        p.hline(Pos::new(0, 0), 3, '=', Style::default());
        p.fill_rect(Rect::new(1, 0, 1, 1), Style::default());
    });
    assert_eq!(backend.buffer().row_text(0), "= =");
}
