//! Compact wire form of a card.
//!
//! The catalog endpoint ships cards with one- or two-letter keys to keep
//! the payload small. List-valued fields that the browser shows as text
//! (lrig, color, skills) are joined on conversion.

use serde::{Deserialize, Serialize};

use super::card::{Card, Story};
use super::format::Format;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardCompact {
    #[serde(rename = "s")]
    pub slug: String,
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "p")]
    pub pronounce: String,
    #[serde(rename = "i")]
    pub img: String,
    #[serde(rename = "t")]
    pub card_type: String,
    #[serde(rename = "lr")]
    pub lrig: Vec<String>,
    #[serde(rename = "lv")]
    pub level: String,
    #[serde(rename = "c")]
    pub color: Vec<String>,
    #[serde(rename = "cl")]
    pub klass: Vec<String>,
    #[serde(rename = "cs")]
    pub cost: Vec<String>,
    #[serde(rename = "l")]
    pub limit: String,
    #[serde(rename = "pw")]
    pub power: String,
    #[serde(rename = "tm")]
    pub team: Vec<String>,
    #[serde(rename = "tp")]
    pub team_piece: bool,
    #[serde(rename = "ti")]
    pub timing: Vec<String>,
    #[serde(rename = "r")]
    pub rarity: String,
    #[serde(rename = "b")]
    pub has_lb: bool,
    #[serde(rename = "bt")]
    pub lb_text: String,
    #[serde(rename = "sk")]
    pub skills: Vec<String>,
    #[serde(rename = "st")]
    pub story: Story,
    #[serde(rename = "fm")]
    pub format: Format,
    #[serde(rename = "co")]
    pub coin: String,
    #[serde(rename = "f1")]
    pub feature_bits1: u64,
    #[serde(rename = "f2")]
    pub feature_bits2: u64,
}

impl From<CardCompact> for Card {
    fn from(c: CardCompact) -> Self {
        Card {
            slug: c.slug,
            name: c.name,
            pronounce: c.pronounce,
            img: c.img,
            card_type: c.card_type,
            lrig: c.lrig.join(","),
            level: c.level,
            color: c.color.join(","),
            klass: c.klass,
            cost: c.cost,
            limit: c.limit,
            power: c.power,
            team: c.team,
            team_piece: c.team_piece,
            timing: c.timing,
            rarity: c.rarity,
            has_lb: c.has_lb,
            lb_text: c.lb_text,
            skills: c.skills.join("\n"),
            story: c.story,
            format: c.format,
            coin: c.coin,
            feature_bits1: c.feature_bits1,
            feature_bits2: c.feature_bits2,
        }
    }
}
