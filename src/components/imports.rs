pub use stylist::css;
pub use yew::prelude::*;
