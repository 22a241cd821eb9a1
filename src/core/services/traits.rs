use crate::Result;
use crate::api::models::{
    CreatePersonResult, DetectOptions, Face, GroupResult, IdentifyResult, Person, PersonFace,
    PersonGroup, SimilarFace, TrainingStatus, VerifyResult,
};
use async_trait::async_trait;
use tokio::io::AsyncRead;
use uuid::Uuid;

/// Detection and recognition operations
#[async_trait]
pub trait FaceService {
    /// Detect faces in the image at a public URL
    async fn detect_url(&self, image_url: &str, options: DetectOptions) -> Result<Vec<Face>>;

    /// Detect faces in raw image bytes
    async fn detect_image(&self, image: Vec<u8>, options: DetectOptions) -> Result<Vec<Face>>;

    /// Detect faces in an image read fully from `reader`
    async fn detect_stream(
        &self,
        reader: Box<dyn AsyncRead + Send + Unpin>,
        options: DetectOptions,
    ) -> Result<Vec<Face>>;

    /// Check whether two detected faces belong to the same person
    async fn verify(&self, face_id1: Uuid, face_id2: Uuid) -> Result<VerifyResult>;

    /// Identify detected faces against a trained person group
    async fn identify(
        &self,
        person_group_id: &str,
        face_ids: &[Uuid],
        max_candidates: u32,
    ) -> Result<Vec<IdentifyResult>>;

    async fn find_similar(&self, face_id: Uuid, face_ids: &[Uuid]) -> Result<Vec<SimilarFace>>;

    /// Cluster faces by similarity
    async fn group(&self, face_ids: &[Uuid]) -> Result<GroupResult>;
}

/// Person group, person and person face management
#[async_trait]
pub trait PersonGroupService {
    async fn train_person_group(&self, person_group_id: &str) -> Result<TrainingStatus>;

    async fn get_person_group_training_status(
        &self,
        person_group_id: &str,
    ) -> Result<TrainingStatus>;

    async fn create_person_group(
        &self,
        person_group_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()>;

    async fn delete_person_group(&self, person_group_id: &str) -> Result<()>;

    async fn update_person_group(
        &self,
        person_group_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()>;

    async fn get_person_group(&self, person_group_id: &str) -> Result<PersonGroup>;

    async fn get_person_groups(&self) -> Result<Vec<PersonGroup>>;

    async fn create_person(
        &self,
        person_group_id: &str,
        face_ids: &[Uuid],
        name: &str,
        user_data: Option<&str>,
    ) -> Result<CreatePersonResult>;

    async fn get_person(&self, person_group_id: &str, person_id: Uuid) -> Result<Person>;

    async fn get_persons(&self, person_group_id: &str) -> Result<Vec<Person>>;

    async fn update_person(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_ids: &[Uuid],
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()>;

    async fn delete_person(&self, person_group_id: &str, person_id: Uuid) -> Result<()>;

    async fn add_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
        user_data: Option<&str>,
    ) -> Result<()>;

    async fn get_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
    ) -> Result<PersonFace>;

    async fn update_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
        user_data: Option<&str>,
    ) -> Result<()>;

    async fn delete_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
    ) -> Result<()>;
}
