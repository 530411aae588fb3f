use std::fmt;

use serde::{Deserialize, Serialize};

// --- Grade ---

/// School grade a kanji is taught in. Grades 1-6 are the kyōiku kanji;
/// `JuniorHigh` covers the rest of the jōyō list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KanjiGrade {
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
    Grade6,
    JuniorHigh,
}

impl KanjiGrade {
    pub fn to_key(self) -> &'static str {
        match self {
            KanjiGrade::Grade1 => "grade1",
            KanjiGrade::Grade2 => "grade2",
            KanjiGrade::Grade3 => "grade3",
            KanjiGrade::Grade4 => "grade4",
            KanjiGrade::Grade5 => "grade5",
            KanjiGrade::Grade6 => "grade6",
            KanjiGrade::JuniorHigh => "juniorHigh",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "grade1" => Some(KanjiGrade::Grade1),
            "grade2" => Some(KanjiGrade::Grade2),
            "grade3" => Some(KanjiGrade::Grade3),
            "grade4" => Some(KanjiGrade::Grade4),
            "grade5" => Some(KanjiGrade::Grade5),
            "grade6" => Some(KanjiGrade::Grade6),
            "juniorHigh" | "junior-high" => Some(KanjiGrade::JuniorHigh),
            _ => None,
        }
    }

    pub fn all() -> &'static [KanjiGrade] {
        &[
            KanjiGrade::Grade1,
            KanjiGrade::Grade2,
            KanjiGrade::Grade3,
            KanjiGrade::Grade4,
            KanjiGrade::Grade5,
            KanjiGrade::Grade6,
            KanjiGrade::JuniorHigh,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            KanjiGrade::Grade1 => "Grade 1",
            KanjiGrade::Grade2 => "Grade 2",
            KanjiGrade::Grade3 => "Grade 3",
            KanjiGrade::Grade4 => "Grade 4",
            KanjiGrade::Grade5 => "Grade 5",
            KanjiGrade::Grade6 => "Grade 6",
            KanjiGrade::JuniorHigh => "Junior High",
        }
    }

    pub fn japanese_name(self) -> &'static str {
        match self {
            KanjiGrade::Grade1 => "第一学年",
            KanjiGrade::Grade2 => "第二学年",
            KanjiGrade::Grade3 => "第三学年",
            KanjiGrade::Grade4 => "第四学年",
            KanjiGrade::Grade5 => "第五学年",
            KanjiGrade::Grade6 => "第六学年",
            KanjiGrade::JuniorHigh => "中学校",
        }
    }

    /// Official number of kanji assigned to this grade.
    pub fn total_count(self) -> usize {
        match self {
            KanjiGrade::Grade1 => 80,
            KanjiGrade::Grade2 => 160,
            KanjiGrade::Grade3 => 200,
            KanjiGrade::Grade4 => 202,
            KanjiGrade::Grade5 => 193,
            KanjiGrade::Grade6 => 191,
            KanjiGrade::JuniorHigh => 1126,
        }
    }
}

impl fmt::Display for KanjiGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_key())
    }
}

// --- Characters ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KanjiExample {
    pub word: &'static str,
    pub reading: &'static str,
    pub meaning: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KanjiCharacter {
    pub glyph: &'static str,
    pub meanings: &'static [&'static str],
    pub on_readings: &'static [&'static str],
    pub kun_readings: &'static [&'static str],
    pub examples: &'static [KanjiExample],
    pub grade: KanjiGrade,
}

impl KanjiCharacter {
    pub fn primary_meaning(&self) -> Option<&'static str> {
        self.meanings.first().copied()
    }

    /// On'yomi followed by kun'yomi, duplicates removed.
    pub fn readings(&self) -> Vec<&'static str> {
        let mut readings: Vec<&'static str> = Vec::new();
        for &reading in self.on_readings.iter().chain(self.kun_readings) {
            if !readings.contains(&reading) {
                readings.push(reading);
            }
        }
        readings
    }

    pub fn has_readings(&self) -> bool {
        !self.on_readings.is_empty() || !self.kun_readings.is_empty()
    }
}

/// A grade as shown in a grade picker: the kanji available in the catalog next
/// to the official total, which may be larger while data is incomplete.
#[derive(Clone, Copy, Debug)]
pub struct KanjiGradeSection {
    pub grade: KanjiGrade,
    pub kanji: &'static [KanjiCharacter],
}

impl KanjiGradeSection {
    pub fn available_count(&self) -> usize {
        self.kanji.len()
    }

    pub fn total_count(&self) -> usize {
        self.grade.total_count()
    }

    pub fn is_complete(&self) -> bool {
        self.available_count() >= self.total_count()
    }
}

// --- Static Data ---

const fn ex(word: &'static str, reading: &'static str, meaning: &'static str) -> KanjiExample {
    KanjiExample {
        word,
        reading,
        meaning,
    }
}

pub const GRADE1_KANJI: &[KanjiCharacter] = &[
    KanjiCharacter {
        glyph: "一",
        meanings: &["one"],
        on_readings: &["イチ", "イツ"],
        kun_readings: &["ひと", "ひと.つ"],
        examples: &[ex("一つ", "ひとつ", "one (thing)"), ex("一月", "いちがつ", "January")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "二",
        meanings: &["two"],
        on_readings: &["ニ", "ジ"],
        kun_readings: &["ふた", "ふた.つ"],
        examples: &[ex("二つ", "ふたつ", "two (things)"), ex("二月", "にがつ", "February")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "三",
        meanings: &["three"],
        on_readings: &["サン", "ゾウ"],
        kun_readings: &["み", "み.つ", "みっ.つ"],
        examples: &[ex("三つ", "みっつ", "three (things)"), ex("三月", "さんがつ", "March")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "四",
        meanings: &["four"],
        on_readings: &["シ"],
        kun_readings: &["よ", "よ.つ", "よっ.つ", "よん"],
        examples: &[ex("四つ", "よっつ", "four (things)"), ex("四月", "しがつ", "April")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "五",
        meanings: &["five"],
        on_readings: &["ゴ"],
        kun_readings: &["いつ", "いつ.つ"],
        examples: &[ex("五つ", "いつつ", "five (things)"), ex("五月", "ごがつ", "May")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "六",
        meanings: &["six"],
        on_readings: &["ロク", "リク"],
        kun_readings: &["む", "む.つ", "むっ.つ", "むい"],
        examples: &[ex("六つ", "むっつ", "six (things)"), ex("六月", "ろくがつ", "June")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "七",
        meanings: &["seven"],
        on_readings: &["シチ"],
        kun_readings: &["なな", "なな.つ", "なの"],
        examples: &[ex("七つ", "ななつ", "seven (things)"), ex("七日", "なのか", "seventh day")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "八",
        meanings: &["eight"],
        on_readings: &["ハチ"],
        kun_readings: &["や", "や.つ", "やっ.つ", "よう"],
        examples: &[ex("八つ", "やっつ", "eight (things)"), ex("八百屋", "やおや", "greengrocer")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "九",
        meanings: &["nine"],
        on_readings: &["キュウ", "ク"],
        kun_readings: &["ここの", "ここの.つ"],
        examples: &[ex("九つ", "ここのつ", "nine (things)"), ex("九月", "くがつ", "September")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "十",
        meanings: &["ten"],
        on_readings: &["ジュウ", "ジッ"],
        kun_readings: &["とお", "と"],
        examples: &[ex("十日", "とおか", "tenth day"), ex("十月", "じゅうがつ", "October")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "日",
        meanings: &["day", "sun", "Japan"],
        on_readings: &["ニチ", "ジツ"],
        kun_readings: &["ひ", "か"],
        examples: &[ex("日曜日", "にちようび", "Sunday"), ex("日本", "にほん", "Japan")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "月",
        meanings: &["month", "moon"],
        on_readings: &["ゲツ", "ガツ"],
        kun_readings: &["つき"],
        examples: &[ex("月曜日", "げつようび", "Monday"), ex("毎月", "まいつき", "every month")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "火",
        meanings: &["fire"],
        on_readings: &["カ"],
        kun_readings: &["ひ", "ほ"],
        examples: &[ex("火曜日", "かようび", "Tuesday"), ex("花火", "はなび", "fireworks")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "水",
        meanings: &["water"],
        on_readings: &["スイ"],
        kun_readings: &["みず"],
        examples: &[ex("水曜日", "すいようび", "Wednesday"), ex("水着", "みずぎ", "swimsuit")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "木",
        meanings: &["tree", "wood"],
        on_readings: &["ボク", "モク"],
        kun_readings: &["き", "こ"],
        examples: &[ex("木曜日", "もくようび", "Thursday"), ex("木村", "きむら", "Kimura (surname)")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "金",
        meanings: &["gold", "money"],
        on_readings: &["キン", "コン"],
        kun_readings: &["かね", "かな"],
        examples: &[ex("金曜日", "きんようび", "Friday"), ex("お金", "おかね", "money")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "土",
        meanings: &["soil", "earth"],
        on_readings: &["ド", "ト"],
        kun_readings: &["つち"],
        examples: &[ex("土曜日", "どようび", "Saturday"), ex("土地", "とち", "land")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "山",
        meanings: &["mountain", "hill"],
        on_readings: &["サン", "セン"],
        kun_readings: &["やま"],
        examples: &[ex("富士山", "ふじさん", "Mount Fuji"), ex("山本", "やまもと", "Yamamoto (surname)")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "川",
        meanings: &["river"],
        on_readings: &["セン"],
        kun_readings: &["かわ"],
        examples: &[ex("川口", "かわぐち", "river mouth"), ex("小川", "おがわ", "stream")],
        grade: KanjiGrade::Grade1,
    },
    KanjiCharacter {
        glyph: "人",
        meanings: &["person"],
        on_readings: &["ジン", "ニン"],
        kun_readings: &["ひと"],
        examples: &[ex("日本人", "にほんじん", "Japanese person"), ex("三人", "さんにん", "three people")],
        grade: KanjiGrade::Grade1,
    },
];

pub const GRADE2_KANJI: &[KanjiCharacter] = &[
    KanjiCharacter {
        glyph: "春",
        meanings: &["spring"],
        on_readings: &["シュン"],
        kun_readings: &["はる"],
        examples: &[ex("春休み", "はるやすみ", "spring break")],
        grade: KanjiGrade::Grade2,
    },
    KanjiCharacter {
        glyph: "夏",
        meanings: &["summer"],
        on_readings: &["カ", "ゲ"],
        kun_readings: &["なつ"],
        examples: &[ex("夏休み", "なつやすみ", "summer vacation")],
        grade: KanjiGrade::Grade2,
    },
    KanjiCharacter {
        glyph: "秋",
        meanings: &["autumn"],
        on_readings: &["シュウ"],
        kun_readings: &["あき"],
        examples: &[ex("秋分", "しゅうぶん", "autumnal equinox")],
        grade: KanjiGrade::Grade2,
    },
    KanjiCharacter {
        glyph: "冬",
        meanings: &["winter"],
        on_readings: &["トウ"],
        kun_readings: &["ふゆ"],
        examples: &[ex("冬休み", "ふゆやすみ", "winter break")],
        grade: KanjiGrade::Grade2,
    },
    KanjiCharacter {
        glyph: "東",
        meanings: &["east"],
        on_readings: &["トウ"],
        kun_readings: &["ひがし"],
        examples: &[ex("東京", "とうきょう", "Tokyo")],
        grade: KanjiGrade::Grade2,
    },
    KanjiCharacter {
        glyph: "西",
        meanings: &["west"],
        on_readings: &["セイ", "サイ"],
        kun_readings: &["にし"],
        examples: &[ex("関西", "かんさい", "Kansai region")],
        grade: KanjiGrade::Grade2,
    },
];
