mod showcase;
pub use showcase::ShowcaseView;
