//! Crate root module declarations for the Plum Checkers rule engine.
//!
//! This file exposes the top-level subsystems (board and match state, move
//! generation and validation, the match controller with its observers, and
//! position helpers) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod board_snapshot;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod match_state;
}

pub mod moves {
    pub mod directions;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_capture;
    pub mod legal_moves_simple;
    pub mod move_generator;
    pub mod perft;
    pub mod terminal_status;
}

pub mod match_control {
    pub mod checkers_match;
    pub mod event_log;
    pub mod observers;
    pub mod snapshot_cache;
}

pub mod utils {
    pub mod position_generator;
    pub mod position_parser;
    pub mod render_board;
}
