use chrono::{DateTime, Datelike, Days, Duration, Months, SecondsFormat, SubsecRound, Utc};

use crate::{glyph, GlyphError, GLYPH_HEIGHT};

/// Weekly columns visible on a one-year contribution graph.
pub const GRAPH_WEEKS: usize = 53;

/// A space shifts the drawing by two empty weeks.
const SPACE_WEEKS: usize = 2;

pub type DrawDate = DateTime<Utc>;

/// Columns a character consumes on the graph, including its trailing gap.
pub fn column_cost(character: char) -> Result<usize, GlyphError> {
    if character == ' ' {
        return Ok(SPACE_WEEKS);
    }
    Ok(glyph(character)?.width() + 1)
}

/// Longest prefix of `text` that still fits in [`GRAPH_WEEKS`] columns.
pub fn longest_drawable_prefix(text: &str) -> Result<&str, GlyphError> {
    let mut columns = 0;
    for (index, character) in text.char_indices() {
        columns += column_cost(character)?;
        if columns > GRAPH_WEEKS {
            return Ok(&text[..index]);
        }
    }
    Ok(text)
}

pub fn validate(text: &str) -> Result<(), GlyphError> {
    let prefix = longest_drawable_prefix(text)?;
    if prefix.len() < text.len() {
        return Err(GlyphError::TextTooLong {
            longest_prefix: prefix.to_string(),
        });
    }
    Ok(())
}

/// First day of the first complete week on the graph: one year before `today`,
/// moved forward to Sunday.
pub fn start_date(today: DrawDate) -> DrawDate {
    let one_year_ago = today.trunc_subsecs(0) - Months::new(12);
    let days_to_sunday = 6 - one_year_ago.weekday().num_days_from_monday();
    one_year_ago + Days::new(days_to_sunday as u64)
}

/// Dates to commit on so that `text` lights up the graph starting at `start`.
///
/// A filled cell lands `row` days and `column` weeks after the glyph's cursor.
/// Each of the seven rows also moves the cursor one day forward, and the glyph
/// then moves it by its width in weeks, so a glyph of width `W` shifts the next
/// one by `W + 1` weeks.
pub fn draw_dates(text: &str, start: DrawDate) -> Result<Vec<DrawDate>, GlyphError> {
    let (_, dates) = text.chars().try_fold(
        (start, Vec::new()),
        |(cursor, mut dates): (DrawDate, Vec<DrawDate>), character| -> Result<_, GlyphError> {
            if character == ' ' {
                return Ok((cursor + Duration::weeks(SPACE_WEEKS as i64), dates));
            }

            let glyph = glyph(character)?;
            dates.extend(glyph.filled_cells().map(|(row, column)| {
                cursor + Duration::days(row as i64) + Duration::weeks(column as i64)
            }));

            let drift = Duration::days(GLYPH_HEIGHT as i64);
            Ok((cursor + drift + Duration::weeks(glyph.width() as i64), dates))
        },
    )?;

    Ok(dates)
}

/// Validates `text` and computes its dates relative to `today`.
pub fn schedule(text: &str, today: DrawDate) -> Result<Vec<DrawDate>, GlyphError> {
    validate(text)?;
    draw_dates(text, start_date(today))
}

pub fn format_draw_date(date: &DrawDate) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike, Weekday};

    use super::*;

    fn today() -> DrawDate {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 30, 15).unwrap() + Duration::milliseconds(250)
    }

    #[test]
    fn validate_accepts_text_up_to_the_graph_width() {
        // 9 * 5 + 6 + 2 = 53
        assert_eq!(validate("AAAAAAAAAMI"), Ok(()));
        assert_eq!(validate(""), Ok(()));
        assert_eq!(validate("HELLO WORLD"), Ok(()));
    }

    #[test]
    fn validate_reports_longest_prefix() {
        assert_eq!(
            validate("AAAAAAAAAMII"),
            Err(GlyphError::TextTooLong {
                longest_prefix: "AAAAAAAAAMI".to_string()
            })
        );
        assert_eq!(
            validate("MMMMMMMMMMMM"),
            Err(GlyphError::TextTooLong {
                longest_prefix: "MMMMMMMM".to_string()
            })
        );
        assert_eq!(longest_drawable_prefix("MMMMMMMMM"), Ok("MMMMMMMM"));
    }

    #[test]
    fn validate_counts_spaces_as_two_columns() {
        // 10 * 5 = 50, a space brings it to 52 and the next I to 54
        assert_eq!(
            validate("AAAAAAAAAA I"),
            Err(GlyphError::TextTooLong {
                longest_prefix: "AAAAAAAAAA ".to_string()
            })
        );
        assert_eq!(validate("AAAAAAAAAA "), Ok(()));
    }

    #[test]
    fn validate_rejects_unknown_characters() {
        assert_eq!(validate("HI!"), Err(GlyphError::UnknownGlyph('!')));
        assert_eq!(validate("hi"), Err(GlyphError::UnknownGlyph('h')));
    }

    #[test]
    fn start_date_is_the_sunday_after_one_year_ago() {
        let start = start_date(today());
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 10, 19, 10, 30, 15).unwrap());
        assert_eq!(start.nanosecond(), 0);

        let wednesday = Utc.with_ymd_and_hms(2026, 10, 21, 8, 0, 0).unwrap();
        assert_eq!(
            start_date(wednesday),
            Utc.with_ymd_and_hms(2025, 10, 26, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn start_date_is_always_a_sunday_within_the_first_week() {
        let first = Utc.with_ymd_and_hms(2027, 1, 1, 23, 59, 59).unwrap();
        for offset in 0..800 {
            let today = first + Duration::days(offset);
            let start = start_date(today);
            let one_year_ago = today - Months::new(12);

            assert_eq!(start.weekday(), Weekday::Sun, "{today}");
            assert!(start >= one_year_ago, "{today}");
            assert!(start <= one_year_ago + Duration::days(6), "{today}");
        }
    }

    #[test]
    fn start_date_clamps_leap_day() {
        // 2027-02-28 is a Sunday
        let leap_day = Utc.with_ymd_and_hms(2028, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(
            start_date(leap_day),
            Utc.with_ymd_and_hms(2027, 2, 28, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn empty_and_blank_text_emit_nothing() {
        assert!(schedule("", today()).unwrap().is_empty());
        assert!(schedule(" ", today()).unwrap().is_empty());
        assert!(schedule("   ", today()).unwrap().is_empty());
    }

    #[test]
    fn single_column_glyph_fills_one_week() {
        let start = start_date(today());
        let dates = schedule("I", today()).unwrap();

        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], start);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn space_shifts_next_glyph_by_two_weeks() {
        let start = start_date(today());
        let dates = draw_dates("A B", start).unwrap();

        // A has 18 filled cells and occupies 5 weeks including drift
        assert_eq!(dates.len(), 18 + 20);
        assert_eq!(dates[18], start + Duration::days(35 + 14));
    }

    #[test]
    fn unknown_glyph_is_a_hard_error() {
        assert_eq!(
            draw_dates("H?", start_date(today())),
            Err(GlyphError::UnknownGlyph('?'))
        );
    }

    #[test]
    fn schedule_hi_fixture() {
        let dates = schedule("HI", today())
            .unwrap()
            .iter()
            .map(format_draw_date)
            .collect::<Vec<_>>();

        let expected = vec![
            "2025-10-19T10:30:15Z",
            "2025-11-09T10:30:15Z",
            "2025-10-20T10:30:15Z",
            "2025-11-10T10:30:15Z",
            "2025-10-21T10:30:15Z",
            "2025-11-11T10:30:15Z",
            "2025-10-22T10:30:15Z",
            "2025-10-29T10:30:15Z",
            "2025-11-05T10:30:15Z",
            "2025-11-12T10:30:15Z",
            "2025-10-23T10:30:15Z",
            "2025-11-13T10:30:15Z",
            "2025-10-24T10:30:15Z",
            "2025-11-14T10:30:15Z",
            "2025-10-25T10:30:15Z",
            "2025-11-15T10:30:15Z",
            "2025-11-23T10:30:15Z",
            "2025-11-24T10:30:15Z",
            "2025-11-25T10:30:15Z",
            "2025-11-26T10:30:15Z",
            "2025-11-27T10:30:15Z",
            "2025-11-28T10:30:15Z",
            "2025-11-29T10:30:15Z",
        ];
        assert_eq!(dates, expected);
    }
}
