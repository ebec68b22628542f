use mockall::mock;
use sales_engine::{DataSourceError, DateString, Order, OrderDataSource, StoreInfo};

mock! {
    pub OrderSource {}
    impl OrderDataSource for OrderSource {
        async fn fetch_store_info(&self) -> Result<StoreInfo, DataSourceError>;
        async fn fetch_orders(&self, from: &DateString, to: &DateString, offset: &str) -> Result<Vec<Order>, DataSourceError>;
    }
}
