use crate::domain::models::{format_rating, AnimeEntry};

const HEADERS: [&str; 5] = ["No", "Judul Anime", "Genre", "Episode", "Rating"];

// Outer widths, one space of padding included on each side.
const WIDTHS: [usize; 5] = [5, 20, 15, 10, 10];

/// Renders entries as a box-drawn grid, numbering rows from 1 in the order given.
pub fn render_table(entries: &[AnimeEntry]) -> String {
    let mut lines = vec![border('┌', '┬', '┐'), row(&HEADERS.map(String::from))];

    for (i, entry) in entries.iter().enumerate() {
        lines.push(border('├', '┼', '┤'));
        lines.push(row(&[
            (i + 1).to_string(),
            entry.title.clone(),
            entry.genre.clone(),
            entry.episodes.clone(),
            format_rating(entry.rating),
        ]));
    }

    lines.push(border('└', '┴', '┘'));
    lines.join("\n")
}

fn border(left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = WIDTHS.iter().map(|w| "─".repeat(*w)).collect();
    format!("{left}{}{right}", segments.join(&mid.to_string()))
}

fn row(cells: &[String; 5]) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(WIDTHS)
        .map(|(cell, width)| {
            let inner = width - 2;
            format!(" {:<inner$} ", fit(cell, inner))
        })
        .collect();
    format!("│{}│", rendered.join("│"))
}

/// Truncates to `max` characters, marking the cut with an ellipsis.
fn fit(text: &str, max: usize) -> String {
    // Newlines would break the grid
    let text = text.replace(|c: char| c == '\n' || c == '\r', " ");
    if text.chars().count() <= max {
        text
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Naruto", 18), "Naruto");
        assert_eq!(fit("Fullmetal Alchemist Brotherhood", 18), "Fullmetal Alchemi…");
        assert_eq!(fit("Fullmetal Alchemi…", 18).chars().count(), 18);
        assert_eq!(fit("two\nlines", 18), "two lines");
    }

    #[test]
    fn test_render_empty_has_header_only() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Judul Anime"));
    }

    #[test]
    fn test_render_rows() {
        let table = render_table(&[
            AnimeEntry::new("Naruto", "Shounen", "220", 9.5),
            AnimeEntry::new("Mushishi", "Iyashikei", "26", 8.0),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines[0],
            "┌─────┬────────────────────┬───────────────┬──────────┬──────────┐"
        );
        assert_eq!(
            lines[1],
            "│ No  │ Judul Anime        │ Genre         │ Episode  │ Rating   │"
        );
        assert_eq!(
            lines[3],
            "│ 1   │ Naruto             │ Shounen       │ 220      │ 9.5      │"
        );
        assert_eq!(
            lines[5],
            "│ 2   │ Mushishi           │ Iyashikei     │ 26       │ 8        │"
        );
        assert_eq!(
            lines.last().unwrap(),
            &"└─────┴────────────────────┴───────────────┴──────────┴──────────┘"
        );

        // Every line spans the same number of columns
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
