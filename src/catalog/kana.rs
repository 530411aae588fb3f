use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn to_key(self) -> &'static str {
        match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        }
    }

    pub fn all() -> &'static [Script] {
        &[Script::Hiragana, Script::Katakana]
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KanaCharacter {
    pub glyph: &'static str,
    pub romaji: &'static str,
    pub script: Script,
}

impl KanaCharacter {
    pub const fn new(glyph: &'static str, romaji: &'static str, script: Script) -> Self {
        Self {
            glyph,
            romaji,
            script,
        }
    }
}

const fn h(glyph: &'static str, romaji: &'static str) -> KanaCharacter {
    KanaCharacter::new(glyph, romaji, Script::Hiragana)
}

const fn k(glyph: &'static str, romaji: &'static str) -> KanaCharacter {
    KanaCharacter::new(glyph, romaji, Script::Katakana)
}

// --- Basic monographs, ordered by gojūon row ---

#[rustfmt::skip]
pub const HIRAGANA: &[KanaCharacter] = &[
    h("あ", "a"), h("い", "i"), h("う", "u"), h("え", "e"), h("お", "o"),
    h("か", "ka"), h("き", "ki"), h("く", "ku"), h("け", "ke"), h("こ", "ko"),
    h("さ", "sa"), h("し", "shi"), h("す", "su"), h("せ", "se"), h("そ", "so"),
    h("た", "ta"), h("ち", "chi"), h("つ", "tsu"), h("て", "te"), h("と", "to"),
    h("な", "na"), h("に", "ni"), h("ぬ", "nu"), h("ね", "ne"), h("の", "no"),
    h("は", "ha"), h("ひ", "hi"), h("ふ", "fu"), h("へ", "he"), h("ほ", "ho"),
    h("ま", "ma"), h("み", "mi"), h("む", "mu"), h("め", "me"), h("も", "mo"),
    h("や", "ya"), h("ゆ", "yu"), h("よ", "yo"),
    h("ら", "ra"), h("り", "ri"), h("る", "ru"), h("れ", "re"), h("ろ", "ro"),
    h("わ", "wa"), h("を", "wo"),
    h("ん", "n"),
];

#[rustfmt::skip]
pub const KATAKANA: &[KanaCharacter] = &[
    k("ア", "a"), k("イ", "i"), k("ウ", "u"), k("エ", "e"), k("オ", "o"),
    k("カ", "ka"), k("キ", "ki"), k("ク", "ku"), k("ケ", "ke"), k("コ", "ko"),
    k("サ", "sa"), k("シ", "shi"), k("ス", "su"), k("セ", "se"), k("ソ", "so"),
    k("タ", "ta"), k("チ", "chi"), k("ツ", "tsu"), k("テ", "te"), k("ト", "to"),
    k("ナ", "na"), k("ニ", "ni"), k("ヌ", "nu"), k("ネ", "ne"), k("ノ", "no"),
    k("ハ", "ha"), k("ヒ", "hi"), k("フ", "fu"), k("ヘ", "he"), k("ホ", "ho"),
    k("マ", "ma"), k("ミ", "mi"), k("ム", "mu"), k("メ", "me"), k("モ", "mo"),
    k("ヤ", "ya"), k("ユ", "yu"), k("ヨ", "yo"),
    k("ラ", "ra"), k("リ", "ri"), k("ル", "ru"), k("レ", "re"), k("ロ", "ro"),
    k("ワ", "wa"), k("ヲ", "wo"),
    k("ン", "n"),
];
