//! Line-oriented rendering
//!
//! The grid goes out row by row, every glyph followed by a tab. Narration and
//! status are plain lines.

use std::io::{self, Write};

use forest_core::{RandomSource, SEPARATOR_WIDTH, Session, TurnEvent};

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn render_status<R: RandomSource, W: Write>(session: &Session<R>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", session.player())
}

pub fn render_grid<R: RandomSource, W: Write>(session: &Session<R>, out: &mut W) -> io::Result<()> {
    for row in session.glyph_rows() {
        for glyph in row {
            write!(out, "{glyph}\t")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_events<W: Write>(events: &[TurnEvent], out: &mut W) -> io::Result<()> {
    for event in events {
        writeln!(out, "{event}")?;
    }
    Ok(())
}

pub fn render_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", separator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_core::{Direction, GOAL_GLYPH, GameConfig, PLAYER_GLYPH, SequenceRng};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_grid_rows_are_tab_separated() {
        let session = Session::new(GameConfig::new(3, 2), SequenceRng::new(vec![0.0])).unwrap();
        let text = render(|out| render_grid(&session, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["🌳\t🌳\t🌈\t", "🦄\t🌳\t🌳\t"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_player_drawn_over_current_cell() {
        let mut session = Session::new(GameConfig::new(3, 3), SequenceRng::new(vec![0.5])).unwrap();
        session.take_turn(Direction::Right);
        let text = render(|out| render_grid(&session, out));
        let bottom = text.lines().last().unwrap();
        assert!(bottom.starts_with(&format!("✨\t{PLAYER_GLYPH}\t")));
        assert!(text.lines().next().unwrap().contains(GOAL_GLYPH));
    }

    #[test]
    fn test_status_and_events() {
        let session = Session::new(GameConfig::default(), SequenceRng::new(vec![0.5])).unwrap();
        assert_eq!(
            render(|out| render_status(&session, out)),
            "Althea: attack 10, defense 5, hp 20\n"
        );
        let events = [TurnEvent::Blocked(Direction::Down), TurnEvent::Escaped];
        assert_eq!(
            render(|out| render_events(&events, out)),
            "Cannot move down\n⭐️ You made it out of the forest! ⭐️\n"
        );
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(render(render_separator), format!("{}\n", "-".repeat(32)));
    }
}
