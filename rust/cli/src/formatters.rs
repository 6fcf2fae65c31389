//! Text rendering of engine state for the terminal.

use classwar_engine::cards::Card;
use classwar_engine::game::{Phase, Snapshot};
use classwar_engine::items::Item;

pub fn format_slot(card: Option<Card>) -> String {
    card.map_or_else(|| "--".to_string(), |c| c.to_string())
}

pub fn format_item(item: Option<&Item>) -> String {
    item.map_or_else(|| "none".to_string(), |i| i.to_string())
}

pub fn format_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::Menu => "menu",
        Phase::Playing => "playing",
        Phase::War => "war",
        Phase::GameOver => "game over",
    }
}

/// One-line board summary: pile sizes, pot, items, and the face-up cards
/// while a war is pending.
pub fn format_board(snap: &Snapshot) -> String {
    let mut line = format!(
        "[{}] Player {} | Opponent {} | Pot {} | Items: {} / {}",
        format_phase(snap.phase),
        snap.player_cards,
        snap.opponent_cards,
        snap.pot,
        format_item(snap.player_item.as_ref()),
        format_item(snap.opponent_item.as_ref()),
    );
    if snap.phase == Phase::War {
        line.push_str(&format!(
            " | Face-up: {} vs {}",
            format_slot(snap.player_revealed),
            format_slot(snap.opponent_revealed)
        ));
    }
    line
}
