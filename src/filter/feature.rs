//! Gameplay feature tags and their bit encoding.
//!
//! The card analyzer tags every card with features detected in its text and
//! packs them into two 64-bit masks. Each feature owns one bit in exactly one
//! family. When a feature is encoded, the *other* family receives bit 0
//! (value `1`), which is why `1` means "nothing from this family" in a
//! feature query.
//!
//! The bit positions are a wire protocol shared with the backend and must not
//! be renumbered.

use serde::{Deserialize, Serialize};

/// Which of the two masks a feature lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureFamily {
    First,
    Second,
}

/// Broad grouping used to lay out feature pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureTag {
    /// Can take the last point.
    Lethal,
    Offensive,
    Disturb,
    Endure,
    Enhance,
    Others,
}

impl FeatureTag {
    pub const ALL: [FeatureTag; 6] = [
        FeatureTag::Lethal,
        FeatureTag::Offensive,
        FeatureTag::Disturb,
        FeatureTag::Endure,
        FeatureTag::Enhance,
        FeatureTag::Others,
    ];
}

/// A gameplay feature a card may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    DoubleCrush,
    TripleCrush,
    DiscardOpponent,
    RandomDiscard,
    Draw,
    Assassin,
    Freeze,
    Drop,
    OnDrop,
    OnRefresh,
    Lancer,
    SLancer,
    RemoveSigni,
    NonAttackable,
    Down,
    Up,
    Charge,
    EnerAttack,
    Trash,
    Ener,
    PowerUp,
    PowerDown,
    Bounce,
    DeckBounce,
    Salvage,
    LifeBurst,
    Shadow,
    Invulnerable,
    OnSpell,
    OnArts,
    OnPiece,
    OnBanish,
    Banish,
    Guard,
    OnGuard,
    AttackNoEffect,
    OnTouch,
    Awake,
    Exceed,
    OnExceed,
    AddLife,
    OnBurst,
    LifeTrash,
    LifeCrush,
    Damage,
    OnLifeCrush,
    Position,
    Vanilla,
    Untouchable,
    TopCheck,
    BottomCheck,
    Barrier,
    MultiEner,
    LrigTrash,
    Charm,
    Craft,
    Acce,
    Rise,
    Recollect,
    SeekTop,
    EraseSkill,
    CancelDamage,
    Reanimate,
    AdditionalAttack,
    UnGuardable,
    SalvageSpell,
    BanishOnAttack,
    Shoot,
    LimitSigni,
    FreeSpell,
    DualColorEner,
    GainCoin,
    BetCoin,
    HandCost,
    AssistCost,
    Inherit,
    PreventGrowCost,
    PutSigniDefense,
    PutSigniOffense,
    Harmony,
    MagicBox,
    Virus,
}

impl Feature {
    /// Every feature, in bit order.
    pub const ALL: &'static [Feature] = &[
        Feature::DoubleCrush,
        Feature::TripleCrush,
        Feature::DiscardOpponent,
        Feature::RandomDiscard,
        Feature::Draw,
        Feature::Assassin,
        Feature::Freeze,
        Feature::Drop,
        Feature::OnDrop,
        Feature::OnRefresh,
        Feature::Lancer,
        Feature::SLancer,
        Feature::RemoveSigni,
        Feature::NonAttackable,
        Feature::Down,
        Feature::Up,
        Feature::Charge,
        Feature::EnerAttack,
        Feature::Trash,
        Feature::Ener,
        Feature::PowerUp,
        Feature::PowerDown,
        Feature::Bounce,
        Feature::DeckBounce,
        Feature::Salvage,
        Feature::LifeBurst,
        Feature::Shadow,
        Feature::Invulnerable,
        Feature::OnSpell,
        Feature::OnArts,
        Feature::OnPiece,
        Feature::OnBanish,
        Feature::Banish,
        Feature::Guard,
        Feature::OnGuard,
        Feature::AttackNoEffect,
        Feature::OnTouch,
        Feature::Awake,
        Feature::Exceed,
        Feature::OnExceed,
        Feature::AddLife,
        Feature::OnBurst,
        Feature::LifeTrash,
        Feature::LifeCrush,
        Feature::Damage,
        Feature::OnLifeCrush,
        Feature::Position,
        Feature::Vanilla,
        Feature::Untouchable,
        Feature::TopCheck,
        Feature::BottomCheck,
        Feature::Barrier,
        Feature::MultiEner,
        Feature::LrigTrash,
        Feature::Charm,
        Feature::Craft,
        Feature::Acce,
        Feature::Rise,
        Feature::Recollect,
        Feature::SeekTop,
        Feature::EraseSkill,
        Feature::CancelDamage,
        Feature::Reanimate,
        Feature::AdditionalAttack,
        Feature::UnGuardable,
        Feature::SalvageSpell,
        Feature::BanishOnAttack,
        Feature::Shoot,
        Feature::LimitSigni,
        Feature::FreeSpell,
        Feature::DualColorEner,
        Feature::GainCoin,
        Feature::BetCoin,
        Feature::HandCost,
        Feature::AssistCost,
        Feature::Inherit,
        Feature::PreventGrowCost,
        Feature::PutSigniDefense,
        Feature::PutSigniOffense,
        Feature::Harmony,
        Feature::MagicBox,
        Feature::Virus,
    ];

    /// Family and bit position of this feature.
    #[must_use]
    pub const fn slot(self) -> (FeatureFamily, u32) {
        use FeatureFamily::{First, Second};
        match self {
            Feature::DoubleCrush => (First, 1),
            Feature::TripleCrush => (First, 2),
            Feature::DiscardOpponent => (First, 3),
            Feature::RandomDiscard => (First, 4),
            Feature::Draw => (First, 5),
            Feature::Assassin => (First, 6),
            Feature::Freeze => (First, 7),
            Feature::Drop => (First, 8),
            Feature::OnDrop => (First, 9),
            Feature::OnRefresh => (First, 10),
            Feature::Lancer => (First, 11),
            Feature::SLancer => (First, 12),
            Feature::RemoveSigni => (First, 13),
            Feature::NonAttackable => (First, 14),
            Feature::Down => (First, 15),
            Feature::Up => (First, 16),
            Feature::Charge => (First, 17),
            Feature::EnerAttack => (First, 18),
            Feature::Trash => (First, 19),
            Feature::Ener => (First, 20),
            Feature::PowerUp => (First, 21),
            Feature::PowerDown => (First, 22),
            Feature::Bounce => (First, 23),
            Feature::DeckBounce => (First, 24),
            Feature::Salvage => (First, 25),
            Feature::LifeBurst => (First, 26),
            Feature::Shadow => (First, 27),
            Feature::Invulnerable => (First, 28),
            Feature::OnSpell => (First, 29),
            // Bit 30 is unused; arts and piece triggers share bit 31 on the wire.
            Feature::OnArts => (First, 31),
            Feature::OnPiece => (First, 31),
            Feature::OnBanish => (First, 32),
            Feature::Banish => (First, 33),
            Feature::Guard => (First, 34),
            Feature::OnGuard => (First, 35),
            Feature::AttackNoEffect => (First, 36),
            Feature::OnTouch => (First, 38),
            Feature::Awake => (First, 39),
            Feature::Exceed => (First, 40),
            Feature::OnExceed => (First, 41),
            Feature::AddLife => (First, 42),
            Feature::OnBurst => (First, 43),
            Feature::LifeTrash => (First, 44),
            Feature::LifeCrush => (First, 45),
            Feature::Damage => (First, 46),
            Feature::OnLifeCrush => (First, 47),
            Feature::Position => (First, 48),
            Feature::Vanilla => (First, 49),
            Feature::Untouchable => (First, 50),
            Feature::TopCheck => (First, 51),
            Feature::BottomCheck => (First, 52),
            Feature::Barrier => (First, 53),
            Feature::MultiEner => (First, 54),
            Feature::LrigTrash => (First, 55),
            Feature::Charm => (First, 56),
            Feature::Craft => (First, 57),
            Feature::Acce => (First, 58),
            Feature::Rise => (First, 59),
            Feature::Recollect => (First, 60),
            Feature::SeekTop => (First, 61),
            Feature::EraseSkill => (First, 62),
            Feature::CancelDamage => (Second, 1),
            Feature::Reanimate => (Second, 2),
            Feature::AdditionalAttack => (Second, 3),
            Feature::UnGuardable => (Second, 4),
            Feature::SalvageSpell => (Second, 5),
            Feature::BanishOnAttack => (Second, 6),
            Feature::Shoot => (Second, 7),
            Feature::LimitSigni => (Second, 8),
            Feature::FreeSpell => (Second, 9),
            Feature::DualColorEner => (Second, 10),
            Feature::GainCoin => (Second, 11),
            Feature::BetCoin => (Second, 12),
            Feature::HandCost => (Second, 13),
            Feature::AssistCost => (Second, 14),
            Feature::Inherit => (Second, 15),
            Feature::PreventGrowCost => (Second, 16),
            Feature::PutSigniDefense => (Second, 17),
            Feature::PutSigniOffense => (Second, 18),
            Feature::Harmony => (Second, 19),
            Feature::MagicBox => (Second, 20),
            Feature::Virus => (Second, 21),
        }
    }

    /// Encoded `(bits1, bits2)` pair for this feature alone.
    ///
    /// ```
    /// use deck_keeper::filter::Feature;
    ///
    /// assert_eq!(Feature::Draw.to_bits(), (1 << 5, 1));
    /// assert_eq!(Feature::Shoot.to_bits(), (1, 1 << 7));
    /// ```
    #[must_use]
    pub const fn to_bits(self) -> (u64, u64) {
        match self.slot() {
            (FeatureFamily::First, shift) => (1 << shift, 1),
            (FeatureFamily::Second, shift) => (1, 1 << shift),
        }
    }

    #[must_use]
    pub const fn family(self) -> FeatureFamily {
        self.slot().0
    }

    /// Picker grouping.
    #[must_use]
    pub const fn tag(self) -> FeatureTag {
        match self {
            Feature::AdditionalAttack
            | Feature::Assassin
            | Feature::BanishOnAttack
            | Feature::SLancer
            | Feature::Damage
            | Feature::RemoveSigni
            | Feature::UnGuardable
            | Feature::LimitSigni => FeatureTag::Lethal,

            Feature::DoubleCrush
            | Feature::TripleCrush
            | Feature::Lancer
            | Feature::LifeCrush
            | Feature::LifeTrash
            | Feature::Banish
            | Feature::DeckBounce
            | Feature::Bounce
            | Feature::PowerDown
            | Feature::Ener
            | Feature::Trash
            | Feature::Up
            | Feature::PutSigniOffense => FeatureTag::Offensive,

            Feature::EnerAttack
            | Feature::Shoot
            | Feature::EraseSkill
            | Feature::Position
            | Feature::Drop
            | Feature::Freeze
            | Feature::RandomDiscard
            | Feature::DiscardOpponent
            | Feature::Virus => FeatureTag::Disturb,

            Feature::Guard
            | Feature::Invulnerable
            | Feature::Shadow
            | Feature::NonAttackable
            | Feature::Down
            | Feature::OnGuard
            | Feature::Barrier
            | Feature::Untouchable
            | Feature::CancelDamage
            | Feature::Vanilla
            | Feature::AddLife
            | Feature::AttackNoEffect
            | Feature::PowerUp
            | Feature::PutSigniDefense => FeatureTag::Endure,

            Feature::LifeBurst
            | Feature::Draw
            | Feature::Salvage
            | Feature::SalvageSpell
            | Feature::Reanimate
            | Feature::SeekTop
            | Feature::Recollect
            | Feature::MultiEner
            | Feature::BottomCheck
            | Feature::TopCheck
            | Feature::Charge
            | Feature::FreeSpell
            | Feature::DualColorEner
            | Feature::GainCoin
            | Feature::BetCoin
            | Feature::AssistCost
            | Feature::PreventGrowCost => FeatureTag::Enhance,

            Feature::Acce
            | Feature::Rise
            | Feature::Craft
            | Feature::Charm
            | Feature::LrigTrash
            | Feature::OnLifeCrush
            | Feature::OnBurst
            | Feature::Exceed
            | Feature::OnExceed
            | Feature::Awake
            | Feature::OnTouch
            | Feature::OnBanish
            | Feature::OnArts
            | Feature::OnPiece
            | Feature::OnSpell
            | Feature::OnRefresh
            | Feature::OnDrop
            | Feature::HandCost
            | Feature::Harmony
            | Feature::Inherit
            | Feature::MagicBox => FeatureTag::Others,
        }
    }

    /// Display label shown in feature pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Feature::DoubleCrush => "ダブルクラッシュ",
            Feature::TripleCrush => "トリプルクラッシュ",
            Feature::DiscardOpponent => "手札破壊",
            Feature::RandomDiscard => "ランダム手札破壊",
            Feature::Draw => "ドロー",
            Feature::Assassin => "アサシン",
            Feature::Freeze => "凍結",
            Feature::Drop => "デッキドロップ",
            Feature::OnDrop => "デッキドロップ時",
            Feature::OnRefresh => "リフレッシュ時",
            Feature::Lancer => "ランサー",
            Feature::SLancer => "Sランサー",
            Feature::RemoveSigni => "シグニ除外",
            Feature::NonAttackable => "アタック不可",
            Feature::Down => "ダウン",
            Feature::Up => "アップ",
            Feature::Charge => "エナチャージ",
            Feature::EnerAttack => "エナ破壊",
            Feature::Trash => "トラッシュ送り",
            Feature::Ener => "エナ送り",
            Feature::PowerUp => "パワーアップ",
            Feature::PowerDown => "パワーダウン",
            Feature::Bounce => "バウンス",
            Feature::DeckBounce => "デッキバウンス",
            Feature::Salvage => "回収",
            Feature::LifeBurst => "ライフバースト",
            Feature::Shadow => "シャドウ",
            Feature::Invulnerable => "バニッシュされない",
            Feature::OnSpell => "スペル使用時",
            Feature::OnArts => "アーツ使用時",
            Feature::OnPiece => "ピース使用時",
            Feature::OnBanish => "バニッシュした時",
            Feature::Banish => "バニッシュ",
            Feature::Guard => "ガード",
            Feature::OnGuard => "ガードした時",
            Feature::AttackNoEffect => "アタック無効",
            Feature::OnTouch => "対象になった時",
            Feature::Awake => "覚醒",
            Feature::Exceed => "エクシード",
            Feature::OnExceed => "エクシードした時",
            Feature::AddLife => "ライフクロス追加",
            Feature::OnBurst => "ライフバースト発動時",
            Feature::LifeTrash => "ライフクロストラッシュ送り",
            Feature::LifeCrush => "クラッシュ",
            Feature::Damage => "ダメージ",
            Feature::OnLifeCrush => "クラッシュ時",
            Feature::Position => "シグニゾーン移動",
            Feature::Vanilla => "能力を持たない",
            Feature::Untouchable => "効果を受けない",
            Feature::TopCheck => "トップ確認",
            Feature::BottomCheck => "ボトム確認",
            Feature::Barrier => "バリア獲得",
            Feature::MultiEner => "マルチエナ",
            Feature::LrigTrash => "ルリグトラッシュ",
            Feature::Charm => "チャーム",
            Feature::Craft => "クラフト",
            Feature::Acce => "アクセ",
            Feature::Rise => "ライズ",
            Feature::Recollect => "リコレクト",
            Feature::SeekTop => "シーク",
            Feature::EraseSkill => "能力消去",
            Feature::CancelDamage => "ダメージ無効",
            Feature::Reanimate => "トラッシュ場出し",
            Feature::AdditionalAttack => "追加アタック",
            Feature::UnGuardable => "ガード不可",
            Feature::SalvageSpell => "スペル回収",
            Feature::BanishOnAttack => "アタック時バニッシュ",
            Feature::Shoot => "シュート",
            Feature::LimitSigni => "配置禁止",
            Feature::FreeSpell => "スペル割引",
            Feature::DualColorEner => "多色エナ",
            Feature::GainCoin => "コイン獲得",
            Feature::BetCoin => "ベット",
            Feature::HandCost => "手札コスト",
            Feature::AssistCost => "アシストダウン",
            Feature::Inherit => "ルリグ能力継承",
            Feature::PreventGrowCost => "グロウコスト軽減",
            Feature::PutSigniDefense => "ブロッカー場出し",
            Feature::PutSigniOffense => "シグニ場出し",
            Feature::Harmony => "ハーモニー",
            Feature::MagicBox => "マジックボックス",
            Feature::Virus => "ウィルス",
        }
    }

    /// Features belonging to a picker group, in bit order.
    pub fn by_tag(tag: FeatureTag) -> impl Iterator<Item = Feature> {
        Self::ALL.iter().copied().filter(move |f| f.tag() == tag)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
