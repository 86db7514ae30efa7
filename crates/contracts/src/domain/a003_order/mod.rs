pub mod aggregate;
pub mod checkout;
pub mod draft;

pub use aggregate::{Order, OrderLine, OrderType, RecordPaymentRequest};
pub use checkout::{CheckoutBlock, CheckoutState, CreateOrderRequest};
pub use draft::{DraftLine, OrderDraft};
