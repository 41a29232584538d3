use crate::models::record::PlaceRecord;

#[derive(Debug, Clone)]
pub struct GroupDecision {
    pub place_id: String,
    pub keep: PlaceRecord,
    pub delete: Vec<PlaceRecord>,
}
