use chrono::{DateTime, Utc};
use cucumber::World;
use sales_engine::{test_utils::StaticOrderSource, Order, SalesReportApi, SkillRequest, SkillResponse, StoreInfo};

#[derive(Debug, World)]
pub struct SkillWorld {
    pub store: StoreInfo,
    pub orders: Vec<Order>,
    pub store_available: bool,
    pub orders_available: bool,
    pub now: DateTime<Utc>,
    pub source: StaticOrderSource,
    pub response: Option<SkillResponse>,
}

impl Default for SkillWorld {
    fn default() -> Self {
        Self {
            store: StoreInfo::default(),
            orders: vec![],
            store_available: true,
            orders_available: true,
            now: Utc::now(),
            source: StaticOrderSource::default(),
            response: None,
        }
    }
}

impl SkillWorld {
    pub async fn ask(&mut self, request: SkillRequest) {
        let mut source = StaticOrderSource::new(self.store.clone(), self.orders.clone());
        if !self.store_available {
            source.store = None;
        }
        if !self.orders_available {
            source.orders = None;
        }
        self.source = source.clone();
        let api = SalesReportApi::new(source);
        let response = api.respond_at(&request, self.now).await;
        self.response = Some(response);
    }

    pub fn response(&self) -> &SkillResponse {
        self.response.as_ref().expect("The skill has not been asked anything yet")
    }
}
