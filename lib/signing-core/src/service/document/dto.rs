use crate::model::artifact::ArtifactId;

#[derive(Clone, Debug)]
pub struct DocumentDTO {
    pub id: ArtifactId,
    pub content: Vec<u8>,
    pub content_type: &'static str,
}
