//! One render function per routed view. Each draws into the body
//! region only; menu, banner and footer are drawn around them.

pub mod about;
pub mod create;
pub mod detail;
pub mod list;
