//! Gift Catalog
//!
//! The fixed list of gifts a user can pick from. Declaration order is
//! display order.

/// Display grouping for catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Romantic,
    SweetTreats,
    CuteAndFun,
    Everyday,
    Fancy,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Romantic => "Romantic & Valentine's",
            Category::SweetTreats => "Sweet Treats",
            Category::CuteAndFun => "Cute & Fun",
            Category::Everyday => "Everyday & Casual",
            Category::Fancy => "Fancy & Elegant",
        }
    }
}

/// One selectable gift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GiftEntry {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: Category,
}

impl GiftEntry {
    const fn new(id: u32, name: &'static str, icon: &'static str, category: Category) -> Self {
        Self { id, name, icon, category }
    }

    /// "icon name", as shown in the confirmation and the email
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

use Category::*;

pub const CATALOG: [GiftEntry; 25] = [
    GiftEntry::new(1, "Rose", "🌹", Romantic),
    GiftEntry::new(2, "Flowers", "💐", Romantic),
    GiftEntry::new(3, "Heart", "❤️", Romantic),
    GiftEntry::new(4, "Ring", "💍", Romantic),
    GiftEntry::new(5, "Love Letter", "💌", Romantic),
    GiftEntry::new(6, "Chocolates", "🍫", SweetTreats),
    GiftEntry::new(7, "Cake", "🎂", SweetTreats),
    GiftEntry::new(8, "Cookie", "🍪", SweetTreats),
    GiftEntry::new(9, "Ice Cream", "🍦", SweetTreats),
    GiftEntry::new(10, "Cupcake", "🧁", SweetTreats),
    GiftEntry::new(11, "Teddy Bear", "🧸", CuteAndFun),
    GiftEntry::new(12, "Balloons", "🎈", CuteAndFun),
    GiftEntry::new(13, "Gift Box", "🎁", CuteAndFun),
    GiftEntry::new(14, "Football", "⚽", CuteAndFun),
    GiftEntry::new(15, "Trophy", "🏆", CuteAndFun),
    GiftEntry::new(16, "Coffee", "☕", Everyday),
    GiftEntry::new(17, "Pizza", "🍕", Everyday),
    GiftEntry::new(18, "Book", "📚", Everyday),
    GiftEntry::new(19, "Donut", "🍩", Everyday),
    GiftEntry::new(20, "Sunflower", "🌻", Everyday),
    GiftEntry::new(21, "Perfume", "🧴", Fancy),
    GiftEntry::new(22, "Candle", "🕯️", Fancy),
    GiftEntry::new(23, "Wallet", "👛", Fancy),
    GiftEntry::new(24, "Watch", "⌚", Fancy),
    GiftEntry::new(25, "Diamond", "💎", Fancy),
];

/// All gifts in display order
pub fn catalog() -> &'static [GiftEntry] {
    &CATALOG
}

pub fn find_by_id(id: u32) -> Option<&'static GiftEntry> {
    CATALOG.iter().find(|gift| gift.id == id)
}

/// Case-insensitive lookup by display name ("ice cream" finds "Ice Cream")
pub fn find_by_name(name: &str) -> Option<&'static GiftEntry> {
    let name = name.trim();
    CATALOG.iter().find(|gift| gift.name.eq_ignore_ascii_case(name))
}
