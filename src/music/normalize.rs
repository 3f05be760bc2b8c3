/// Returns true for numeral glyphs used to number songs in a cell:
/// circled, parenthesized, full-stop and negative-circled forms.
fn is_numeral_glyph(character: char) -> bool {
    matches!(character,
        '\u{24EA}'                 // ⓪
        | '\u{2460}'..='\u{2473}'  // ①..⑳
        | '\u{2474}'..='\u{2487}'  // ⑴..⒇
        | '\u{2488}'..='\u{249B}'  // ⒈..⒛
        | '\u{24EB}'..='\u{24F4}'  // ⓫..⓴
        | '\u{2776}'..='\u{2793}'  // ❶..➓
        | '\u{3251}'..='\u{325F}'  // ㉑..㉟
        | '\u{32B1}'..='\u{32BF}'  // ㊱..㊿
    )
}

/// Strips ASCII digits, full-width digits and numeral glyphs, then trims.
pub fn normalize_mention(text: &str) -> String {
    text.chars()
        .filter(|character| {
            !character.is_ascii_digit()
                && !('０'..='９').contains(character)
                && !is_numeral_glyph(*character)
        })
        .collect::<String>()
        .trim()
        .to_owned()
}
