use crate::api::models::ModelList;
use crate::api::{ApiClient, MODELS_PATH};
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Default, PartialEq)]
pub struct ModelGroups {
    pub chat: Vec<String>,
    pub thinking: Vec<String>,
    pub media: Vec<String>,
}

impl ModelGroups {
    /// Bucket ids by substring: `imagine` wins over `thinking`, the rest
    /// are chat models. Each bucket comes out sorted.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups = ModelGroups::default();
        for id in ids {
            if id.contains("imagine") {
                groups.media.push(id);
            } else if id.contains("thinking") {
                groups.thinking.push(id);
            } else {
                groups.chat.push(id);
            }
        }
        groups.chat.sort();
        groups.thinking.sort();
        groups.media.sort();
        groups
    }

    pub fn len(&self) -> usize {
        self.chat.len() + self.thinking.len() + self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty groups are left out. Thinking and media headings always get
    /// a blank line above them, even when the chat group is missing.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "\nAvailable models ({}):\n", self.len())?;

        let sections = [
            ("", "Chat Models:", &self.chat),
            ("\n", "Thinking Models:", &self.thinking),
            ("\n", "Image/Video Models:", &self.media),
        ];

        for (lead, heading, ids) in sections {
            if ids.is_empty() {
                continue;
            }
            writeln!(out, "{}{}", lead, heading)?;
            for id in ids {
                writeln!(out, "  - {}", id)?;
            }
        }

        writeln!(out)?;
        Ok(())
    }
}

pub async fn fetch(client: &ApiClient) -> Result<ModelGroups> {
    let response = client.get_json(MODELS_PATH).await?;
    let list: ModelList = serde_json::from_value(response)?;
    Ok(ModelGroups::from_ids(list.data.into_iter().map(|m| m.id)))
}
