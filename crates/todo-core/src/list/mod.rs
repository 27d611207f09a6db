//! List Management
//!
//! Client-side state of a fetched collection (filter, pagination) and the
//! controller driving CRUD through modals.

mod controller;
mod view;


pub use controller::{
    FormState, ListController, ListObserver, ListState, Modal, NoopObserver, Notice, NoticeKind,
};
pub use view::{filter_items, page_bounds, total_pages, ListView, Page, PageRow, PAGE_SIZE};
