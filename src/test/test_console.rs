#[cfg(test)]
mod test {
    use crate::console_interface::{parse_level, render_game_to_string};
    use crate::core::*;
    use crate::error::Error;
    use crate::test::test_util::INITIAL_LEVEL;

    #[test]
    fn starting_layout_parses_to_initial_state() {
        let game = parse_level(INITIAL_LEVEL).expect("starting layout parses");
        assert_eq!(game, GameState::initial());
    }

    #[test]
    fn rendering_marks_entities_standing_on_target() {
        let mut game = GameState::initial();
        game.player = game.target;
        let rendered = render_game_to_string(&game);
        assert!(rendered.contains("#   + #"), "{}", rendered);

        game.player = PLAYER_START;
        game.agent = game.target;
        let rendered = render_game_to_string(&game);
        assert!(rendered.contains("#   a #"), "{}", rendered);
    }

    #[test]
    fn target_under_player_is_still_found() {
        let game = parse_level(r#"
#######
#     #
#  $  #
#     #
#   + #
#    A#
#######
"#)
        .expect("level parses");
        assert_eq!(game.player, Vec2::new(3, 3));
        assert_eq!(game.target, Vec2::new(3, 3));
    }

    #[test]
    fn short_row_is_rejected() {
        let result = parse_level(r#"
#######
#@    #
#    #
#  $  #
#   . #
#    A#
#######
"#);
        assert!(matches!(result, Err(Error::InvalidLevelShape { got: 6, row: 2, .. })));
    }

    #[test]
    fn unknown_tile_is_rejected() {
        let result = parse_level(r#"
#######
#@    #
#  X  #
#  $  #
#   . #
#    A#
#######
"#);
        assert!(matches!(result, Err(Error::InvalidCellCharacter { character: 'X', row: 2, column: 3 })));
    }

    #[test]
    fn missing_and_duplicate_entities_are_rejected() {
        let missing_agent = parse_level(r#"
#######
#@    #
#     #
#  $  #
#   . #
#     #
#######
"#);
        assert!(matches!(missing_agent, Err(Error::MissingEntity { entity: "agent" })));

        let two_boxes = parse_level(r#"
#######
#@    #
#   $ #
#  $  #
#   . #
#    A#
#######
"#);
        assert!(matches!(two_boxes, Err(Error::DuplicateEntity { entity: "box" })));
    }
}
