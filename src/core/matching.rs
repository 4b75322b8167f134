// topic matching: which playbook entries does a category's keyword list hit?
use crate::core::mapper::RiskMapper;
use crate::core::schema::PlaybookEntry;

impl RiskMapper {
    /// Find playbook entries whose topic tags intersect the given keywords.
    ///
    /// Match rule: case-insensitive substring containment of the keyword in a
    /// topic tag. An entry matches at most once even if several keywords (or
    /// several of its topics) hit. Result preserves playbook order.
    pub fn match_indicators(&self, keywords: &[&str]) -> Vec<&PlaybookEntry> {
        let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        let mut matched = Vec::new();
        for entry in &self.playbook {
            'keywords: for kw in &lowered {
                for topic in &entry.topics {
                    if topic.to_lowercase().contains(kw.as_str()) {
                        matched.push(entry);
                        //first hit wins, no duplicate entries per category
                        break 'keywords;
                    }
                }
            }
        }
        matched
    }
}
