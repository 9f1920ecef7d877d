// ABOUTME: Built-in ingredient lists, recipe names, and per-ingredient measurements
// ABOUTME: The default subsequence of every category is immutable and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

/// Default fruits, in display order
pub const DEFAULT_FRUITS: &[&str] = &[
    "バナナ",
    "いちご",
    "ブルーベリー",
    "マンゴー",
    "パイナップル",
    "りんご",
    "オレンジ",
    "キウイ",
    "ぶどう",
    "スイカ",
    "メロン",
    "さくらんぼ",
];

/// Default vegetables, in display order
pub const DEFAULT_VEGGIES: &[&str] = &[
    "ほうれん草",
    "ケール",
    "きゅうり",
    "にんじん",
    "ビート",
    "セロリ",
    "しょうが",
    "パセリ",
    "ミント",
    "バジル",
];

/// Default liquids, in display order
pub const DEFAULT_LIQUIDS: &[&str] = &[
    "アーモンドミルク",
    "ココナッツミルク",
    "オートミルク",
    "豆乳",
    "水",
    "ココナッツウォーター",
    "オレンジジュース",
    "りんごジュース",
    "グリーンティー",
    "ヨーグルト",
];

/// Pool of recipe names; one is drawn uniformly per generated recipe
pub const RECIPE_NAMES: [&str; 16] = [
    "トロピカルパラダイス",
    "ベリーブラスト",
    "グリーンゴッデス",
    "サンライズスムージー",
    "パープルパワー",
    "シトラスバースト",
    "トロピカルストーム",
    "ベリーデライト",
    "グリーンマシン",
    "サンシャインスムージー",
    "パープルレイン",
    "シトラスゼスト",
    "トロピカルドリーム",
    "ベリークラッシュ",
    "グリーンヴァイタリティ",
    "ゴールデンサンライズ",
];

/// Measurement per default fruit
pub const FRUIT_MEASUREMENTS: &[(&str, &str)] = &[
    ("バナナ", "100g"),
    ("いちご", "80g"),
    ("ブルーベリー", "60g"),
    ("マンゴー", "120g"),
    ("パイナップル", "100g"),
    ("りんご", "120g"),
    ("オレンジ", "150g"),
    ("キウイ", "80g"),
    ("ぶどう", "100g"),
    ("スイカ", "200g"),
    ("メロン", "150g"),
    ("さくらんぼ", "80g"),
];

/// Measurement per default vegetable
pub const VEGGIE_MEASUREMENTS: &[(&str, &str)] = &[
    ("ほうれん草", "50g"),
    ("ケール", "40g"),
    ("きゅうり", "80g"),
    ("にんじん", "60g"),
    ("ビート", "50g"),
    ("セロリ", "60g"),
    ("しょうが", "10g"),
    ("パセリ", "20g"),
    ("ミント", "15g"),
    ("バジル", "20g"),
];

/// Measurement per default liquid
pub const LIQUID_MEASUREMENTS: &[(&str, &str)] = &[
    ("アーモンドミルク", "200ml"),
    ("ココナッツミルク", "200ml"),
    ("オートミルク", "200ml"),
    ("豆乳", "200ml"),
    ("水", "200ml"),
    ("ココナッツウォーター", "200ml"),
    ("オレンジジュース", "200ml"),
    ("りんごジュース", "200ml"),
    ("グリーンティー", "200ml"),
    ("ヨーグルト", "150ml"),
];
