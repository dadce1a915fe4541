pub mod countdown;
pub mod foodstuffs;
