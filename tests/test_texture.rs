use gto_agent::cards::*;
use gto_agent::texture::*;

fn texture(board: &str) -> BoardTexture {
    classify_texture(&parse_board(board).unwrap())
}

#[test]
fn test_monotone_flop_is_wet() {
    assert_eq!(texture("Kh8h3h"), BoardTexture::Wet);
}

#[test]
fn test_rainbow_spread_is_dry() {
    assert_eq!(texture("Kh8d3c"), BoardTexture::Dry);
    assert_eq!(texture("Ah9d5c"), BoardTexture::Dry);
}

#[test]
fn test_connected_is_wet() {
    assert_eq!(texture("9h8d2c"), BoardTexture::Wet);
}

#[test]
fn test_paired_is_wet() {
    assert_eq!(texture("KhKd3c"), BoardTexture::Wet);
}

#[test]
fn test_two_tone_spread_is_dry() {
    assert_eq!(texture("Kh8h3c"), BoardTexture::Dry);
}

#[test]
fn test_turn_and_river() {
    assert_eq!(texture("Kh8d3cJs"), BoardTexture::Dry);
    assert_eq!(texture("Kh8d3cJsTd"), BoardTexture::Wet);
}

#[test]
fn test_empty_board_is_dry() {
    assert_eq!(classify_texture(&[]), BoardTexture::Dry);
}

#[test]
fn test_texture_names() {
    for t in ALL_TEXTURES {
        assert_eq!(BoardTexture::from_name(t.as_str()), Some(t));
    }
    assert_eq!(BoardTexture::from_name("WET"), Some(BoardTexture::Wet));
}
