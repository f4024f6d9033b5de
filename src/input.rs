//! Driver input: the rectangle count, field size, and starting corners.
//!
//! The format is a stream of integers: `k n m` followed by `k` groups of
//! `x1 y1 x2 y2`. `n` bounds the x-axis and `m` the y-axis.

use crate::error::InputError;
use crate::geometry::{Field, Rect};
use crate::placement::PlacementProblem;

/// A parsed but not yet validated instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub field: Field,
    pub rects: Vec<Rect>,
}

impl Instance {
    /// Validates the instance into an annealable problem.
    pub fn into_problem(self) -> Result<PlacementProblem, InputError> {
        PlacementProblem::new(self.field, self.rects)
    }
}

/// Parses a whitespace-separated instance. Extra tokens are an error.
///
/// ```
/// use rect_anneal::input::parse_input;
///
/// let instance = parse_input("2 6 6\n2 3 4 1\n3 4 5 2\n").unwrap();
/// assert_eq!(instance.rects.len(), 2);
/// ```
pub fn parse_input(text: &str) -> Result<Instance, InputError> {
    let mut tokens = text.split_whitespace();
    let instance = read_instance(|_| tokens.next().map(str::to_owned))?;
    match tokens.next() {
        Some(extra) => Err(InputError::TrailingInput(extra.to_owned())),
        None => Ok(instance),
    }
}

/// Reads an instance value by value.
///
/// `next` receives a description of the value wanted (for prompting) and
/// returns the raw token, or `None` once input is exhausted.
pub fn read_instance<F>(mut next: F) -> Result<Instance, InputError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut int = |what: String| -> Result<i64, InputError> {
        let token = next(what.as_str()).ok_or_else(|| InputError::MissingValue(what.clone()))?;
        token
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::InvalidInteger {
                what,
                token: token.trim().to_owned(),
            })
    };

    let count = int("the number of rectangles".into())?;
    if count <= 0 {
        return Err(InputError::NonPositiveCount(count));
    }
    let width = int("the field size n (x-axis)".into())?;
    let height = int("the field size m (y-axis)".into())?;
    if width <= 0 || height <= 0 {
        return Err(InputError::NonPositiveField { width, height });
    }

    let mut rects = Vec::new();
    for i in 1..=count {
        let x1 = int(format!("the x-coordinate of the top-left corner of rectangle {i}"))?;
        let y1 = int(format!("the y-coordinate of the top-left corner of rectangle {i}"))?;
        let x2 = int(format!("the x-coordinate of the bottom-right corner of rectangle {i}"))?;
        let y2 = int(format!("the y-coordinate of the bottom-right corner of rectangle {i}"))?;
        rects.push(Rect::new(x1, y1, x2, y2));
    }

    Ok(Instance {
        field: Field::new(width, height),
        rects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample() {
        let instance = parse_input("2\n6\n6\n2\n3\n4\n1\n3\n4\n5\n2\n").unwrap();
        assert_eq!(instance.field, Field::new(6, 6));
        assert_eq!(
            instance.rects,
            vec![Rect::new(2, 3, 4, 1), Rect::new(3, 4, 5, 2)]
        );
    }

    #[test]
    fn test_parse_field_axes() {
        let instance = parse_input("1 8 3  0 3 8 0").unwrap();
        assert_eq!(instance.field.width, 8);
        assert_eq!(instance.field.height, 3);
        assert!(instance.into_problem().is_ok());
    }

    #[test]
    fn test_parse_rejects_non_positive_count() {
        assert_eq!(parse_input("0 5 5"), Err(InputError::NonPositiveCount(0)));
        assert_eq!(parse_input("-3 5 5"), Err(InputError::NonPositiveCount(-3)));
    }

    #[test]
    fn test_parse_rejects_non_positive_field() {
        assert_eq!(
            parse_input("1 5 0 0 1 1 0"),
            Err(InputError::NonPositiveField {
                width: 5,
                height: 0
            })
        );
    }

    #[test]
    fn test_parse_missing_value() {
        let err = parse_input("2 6 6 2 3 4 1 3 4").unwrap_err();
        assert!(matches!(err, InputError::MissingValue(what) if what.contains("rectangle 2")));
    }

    #[test]
    fn test_parse_invalid_integer() {
        let err = parse_input("2 6 six").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidInteger {
                what: "the field size m (y-axis)".into(),
                token: "six".into()
            }
        );
    }

    #[test]
    fn test_parse_trailing_input() {
        assert_eq!(
            parse_input("1 6 6 0 1 1 0 9"),
            Err(InputError::TrailingInput("9".into()))
        );
    }

    #[test]
    fn test_read_instance_prompts_in_order() {
        let mut asked = Vec::new();
        let mut values = ["1", "4", "5", "0", " 2 ", "3", "0"].into_iter();

        let instance = read_instance(|what| {
            asked.push(what.to_owned());
            values.next().map(str::to_owned)
        })
        .unwrap();

        assert_eq!(instance.rects, vec![Rect::new(0, 2, 3, 0)]);
        assert_eq!(asked.len(), 7);
        assert!(asked[0].contains("number of rectangles"));
        assert!(asked[1].contains("x-axis"));
        assert!(asked[2].contains("y-axis"));
        assert!(asked[6].contains("bottom-right"));
    }

    #[test]
    fn test_into_problem_rejects_coordinates_at_i64_min() {
        let min = i64::MIN;
        let text = format!("2 6 6 {min} 2 {} 0 {min} 2 {} 0", min + 2, min + 2);
        let instance = parse_input(&text).unwrap();
        assert!(matches!(
            instance.into_problem(),
            Err(InputError::OutsideField { index: 0, .. })
        ));
    }

    #[test]
    fn test_into_problem_rejects_oversized() {
        let instance = parse_input("1 3 3 0 5 2 0").unwrap();
        assert!(matches!(
            instance.into_problem(),
            Err(InputError::DegenerateMoveRange { .. })
        ));
    }
}
