// ABOUTME: Ingredient category enum and a per-category container type
// ABOUTME: Categories are a fixed, closed set serialized as fruits/veggies/liquids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Ingredient group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fruits
    Fruits,
    /// Vegetables and herbs
    Veggies,
    /// Liquid bases
    Liquids,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 3] = [Self::Fruits, Self::Veggies, Self::Liquids];

    /// Stable identifier used in persisted records and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fruits => "fruits",
            Self::Veggies => "veggies",
            Self::Liquids => "liquids",
        }
    }

    /// Japanese display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Fruits => "フルーツ",
            Self::Veggies => "野菜",
            Self::Liquids => "液体",
        }
    }

    /// Whether ingredients of this category are measured by volume
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Liquids)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fruits" | "fruit" | "フルーツ" => Ok(Self::Fruits),
            "veggies" | "veggie" | "vegetables" | "vegetable" | "野菜" => Ok(Self::Veggies),
            "liquids" | "liquid" | "液体" => Ok(Self::Liquids),
            other => Err(AppError::invalid_input(format!(
                "unknown category '{other}' (expected fruits, veggies, or liquids)"
            ))),
        }
    }
}

/// One value per category
///
/// Missing fields deserialize to `T::default()`, so a persisted record that
/// only mentions some categories still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    /// Value for [`Category::Fruits`]
    #[serde(default)]
    pub fruits: T,
    /// Value for [`Category::Veggies`]
    #[serde(default)]
    pub veggies: T,
    /// Value for [`Category::Liquids`]
    #[serde(default)]
    pub liquids: T,
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` once per category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            fruits: f(Category::Fruits),
            veggies: f(Category::Veggies),
            liquids: f(Category::Liquids),
        }
    }

    /// Borrow the value for `category`
    #[must_use]
    pub const fn get(&self, category: Category) -> &T {
        match category {
            Category::Fruits => &self.fruits,
            Category::Veggies => &self.veggies,
            Category::Liquids => &self.liquids,
        }
    }

    /// Mutably borrow the value for `category`
    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Fruits => &mut self.fruits,
            Category::Veggies => &mut self.veggies,
            Category::Liquids => &mut self.liquids,
        }
    }

    /// Iterate `(category, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Transform every value, keeping the category association
    pub fn map<U>(self, mut f: impl FnMut(Category, T) -> U) -> CategoryMap<U> {
        CategoryMap {
            fruits: f(Category::Fruits, self.fruits),
            veggies: f(Category::Veggies, self.veggies),
            liquids: f(Category::Liquids, self.liquids),
        }
    }
}
