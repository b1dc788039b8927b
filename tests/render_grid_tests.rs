//! RenderGrid tests - region claims and compositing through a sink

use tui_bowling::term::{GridError, LineBuffer, LineSink, RenderGrid};

fn fill(ch: char, width: usize) -> impl Fn(&u32, u16) -> String {
    move |_, _| std::iter::repeat(ch).take(width).collect()
}

#[test]
fn test_overlap_is_rejected_in_either_order() {
    let mut grid: RenderGrid<u32> = RenderGrid::new(9, 9);
    grid.register_region(fill('a', 5), 0, 4, 0, 4).unwrap();
    assert!(matches!(
        grid.register_region(fill('b', 5), 4, 8, 4, 8),
        Err(GridError::RegionConflict { column: 4, row: 4 })
    ));

    let mut grid: RenderGrid<u32> = RenderGrid::new(9, 9);
    grid.register_region(fill('b', 5), 4, 8, 4, 8).unwrap();
    assert!(matches!(
        grid.register_region(fill('a', 5), 0, 4, 0, 4),
        Err(GridError::RegionConflict { .. })
    ));
    assert_eq!(grid.region_count(), 1);
}

#[test]
fn test_fully_tiled_board_has_no_blank_cells() {
    let mut grid: RenderGrid<u32> = RenderGrid::new(7, 3);
    grid.register_region(fill('#', 8), 0, 7, 0, 0).unwrap();
    grid.register_region(fill('<', 3), 0, 2, 1, 3).unwrap();
    grid.register_region(fill('.', 4), 3, 6, 1, 3).unwrap();
    grid.register_region(fill('>', 1), 7, 7, 1, 3).unwrap();

    for row in 0..=3 {
        for column in 0..=7 {
            assert!(grid.owner(column, row).is_some(), "({column}, {row})");
        }
    }

    let buf = grid.render(&0);
    assert_eq!(buf.height(), 4);
    assert!(buf.lines().iter().all(|line| !line.contains(' ')));
    assert_eq!(buf.lines()[0], "########");
    assert_eq!(buf.lines()[2], "<<<....>");
}

#[test]
fn test_callbacks_read_the_context() {
    let mut grid: RenderGrid<u32> = RenderGrid::new(3, 1);
    grid.register_region(|n: &u32, row| format!("{}", n + u32::from(row)), 1, 1, 0, 1)
        .unwrap();

    assert_eq!(grid.render(&4).to_text(), " 4  \n 5  \n");
}

/// A sink that only counts what it receives.
#[derive(Default)]
struct Counter {
    chunks: usize,
    lines: usize,
}

impl LineSink for Counter {
    fn push_str(&mut self, _s: &str) {
        self.chunks += 1;
    }

    fn end_line(&mut self) {
        self.lines += 1;
    }
}

#[test]
fn test_render_board_drives_any_sink() {
    let mut grid: RenderGrid<u32> = RenderGrid::new(4, 2);
    grid.register_region(fill('x', 3), 1, 3, 0, 2).unwrap();

    let mut counter = Counter::default();
    grid.render_board(&0, &mut counter);
    // Per row: blank, region, blank.
    assert_eq!(counter.lines, 3);
    assert_eq!(counter.chunks, 9);

    let mut buf = LineBuffer::new();
    grid.render_row(&0, 1, &mut buf);
    buf.end_line();
    assert_eq!(buf.lines(), &[" xxx ".to_string()]);
}
