//! Strategy: define a family of algorithms, encapsulate each one and make
//! them interchangeable. The context holds one bound algorithm at a time and
//! forwards its operation to it.
//!
//! - [`sort`]: a `Sorter` switching between sorting algorithms
//! - [`payment`]: a `PaymentProcessor` switching between payment methods
//!
//! Both contexts require a strategy at construction, so there is no
//! "nothing bound yet" case to handle.

pub mod payment;
pub mod sort;

pub use payment::{
    CreditCardPayment, PayPalPayment, PaymentKind, PaymentProcessor, PaymentStrategy, Receipt,
};
pub use sort::{BubbleSort, QuickSort, SortKind, SortStrategy, Sorter};
