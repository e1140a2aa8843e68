pub mod locale;

pub use locale::{CurrencyFormat, ShopLocale, UnsupportedLocale};
