pub mod memory;

pub use memory::MemoryStore;

use crate::models::Receipt;
use std::sync::Arc;

/// 收据存储抽象
///
/// 存入后的收据不可变，读取时以 `Arc` 共享快照。
pub trait ReceiptStore: Send + Sync {
    fn insert(&self, id: String, receipt: Receipt);

    fn get(&self, id: &str) -> Option<Arc<Receipt>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
