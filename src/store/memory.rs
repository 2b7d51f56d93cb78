use super::ReceiptStore;
use crate::models::Receipt;
use dashmap::DashMap;
use std::sync::Arc;

/// 内存存储，仅在进程生命周期内有效
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: DashMap<String, Arc<Receipt>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn insert(&self, id: String, receipt: Receipt) {
        self.receipts.insert(id, Arc::new(receipt));
    }

    fn get(&self, id: &str) -> Option<Arc<Receipt>> {
        self.receipts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}
