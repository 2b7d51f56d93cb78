use crate::models::Receipt;
use crate::service::scoring;
use crate::store::ReceiptStore;
use std::sync::Arc;
use uuid::Uuid;

/// 收据服务：接收收据并按ID查询积分
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// 分配ID并保存收据
    pub fn process(&self, receipt: Receipt) -> String {
        let id = Uuid::new_v4().to_string();
        tracing::info!(
            "Receipt {} stored: retailer={:?}, {} items",
            id,
            receipt.retailer,
            receipt.items.len()
        );
        self.store.insert(id.clone(), receipt);
        tracing::debug!("{} receipts in store", self.receipt_count());
        id
    }

    /// 查询积分，ID不存在时返回 None
    pub fn points(&self, id: &str) -> Option<i64> {
        let receipt = self.store.get(id)?;
        let breakdown = scoring::breakdown(&receipt);
        tracing::debug!("Receipt {} points breakdown: {:?}", id, breakdown);
        Some(breakdown.total())
    }

    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}
