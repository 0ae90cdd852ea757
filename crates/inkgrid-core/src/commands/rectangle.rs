//! `R <x1> <y1> <x2> <y2>`: draw a rectangle outline.

use super::args::{Span, parse_ints, require_canvas};
use crate::error::{CommandResult, InvalidInput};
use crate::grid::{Grid, MARKER, Pos};

pub(super) fn run(input: &str, state: Option<&Grid>) -> CommandResult<Grid> {
    let grid = require_canvas(state, input)?;
    let [x1, y1, x2, y2] = parse_ints::<4>(input)?;

    let span = Span::normalized(x1, y1, x2, y2);
    if !span.fits(grid) {
        return Err(InvalidInput::Overflowed {
            target: "rectangle",
            line: input.to_string(),
        }
        .into());
    }

    let (min, max) = span.corners();
    let mut next = grid.clone();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let on_border = x == min.x || x == max.x || y == min.y || y == max.y;
            if on_border {
                next.set(Pos::new(x, y), MARKER);
            }
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use rstest::rstest;

    fn blank() -> Grid {
        Grid::new(20, 4).unwrap()
    }

    #[test]
    fn test_valid_input() {
        let result = run("R 14 1 18 3", Some(&blank())).unwrap();

        let mut expected = blank();
        for x in 13..18 {
            expected.set(Pos::new(x, 0), MARKER);
            expected.set(Pos::new(x, 2), MARKER);
        }
        expected.set(Pos::new(13, 1), MARKER);
        expected.set(Pos::new(17, 1), MARKER);
        assert_eq!(result, expected);

        for x in 14..17 {
            assert!(result.is_blank(Pos::new(x, 1)));
        }
    }

    #[test]
    fn test_corners_in_any_order() {
        let a = run("R 14 1 18 3", Some(&blank())).unwrap();
        let b = run("R 18 3 14 1", Some(&blank())).unwrap();
        let c = run("R 14 3 18 1", Some(&blank())).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_degenerate_rectangles() {
        let point = run("R 5 2 5 2", Some(&blank())).unwrap();
        assert_eq!(point.count(MARKER), 1);

        let flat = run("R 1 1 20 1", Some(&blank())).unwrap();
        assert_eq!(flat.count(MARKER), 20);
    }

    #[test]
    fn test_whole_canvas_border() {
        let result = run("R 1 1 20 4", Some(&blank())).unwrap();
        assert_eq!(result.count(MARKER), 20 * 2 + 2 * 2);
        assert!(result.is_blank(Pos::new(1, 1)));
    }

    #[test]
    fn test_interior_left_untouched() {
        let mut state = blank();
        state.set(Pos::new(15, 1), 'o');
        let result = run("R 14 1 18 3", Some(&state)).unwrap();
        assert_eq!(result.get(Pos::new(15, 1)), Some('o'));
    }

    #[test]
    fn test_requires_canvas() {
        assert!(matches!(
            run("R 14 1 18 3", None),
            Err(CommandError::InvalidInput(InvalidInput::Uninitialized(_)))
        ));
    }

    #[rstest]
    #[case::missing_param("R 14 1 18")]
    #[case::more_param("R 14 1 18 3 4")]
    #[case::invalid_param("R 14 1 18 abcd")]
    fn test_rejects_bad_format(#[case] input: &str) {
        assert_eq!(
            run(input, Some(&blank())),
            Err(CommandError::InvalidInput(InvalidInput::Format(input.to_string())))
        );
    }

    #[rstest]
    #[case::past_bottom("R 14 1 18 25")]
    #[case::past_right("R 14 1 21 3")]
    #[case::zero_corner("R 0 0 3 3")]
    fn test_rejects_overflow(#[case] input: &str) {
        let err = run(input, Some(&blank())).unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid rectangle: {input} -- overflowed"));
    }
}
