use super::traits::FaceService;
use crate::Result;
use crate::api::client::{BodyEncoding, RequestExecutor};
use crate::api::models::{
    DetectOptions, Face, GroupResult, IdentifyResult, SimilarFace, VerifyResult,
};
use crate::api::params::Params;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::utils::error_helpers::decode_json;
use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};
use uuid::Uuid;

/// Typed client for the face API.
///
/// Cheap to clone; every call is an independent request carrying the configured
/// subscription key.
#[derive(Debug, Clone)]
pub struct FaceServiceClient {
    executor: RequestExecutor,
    endpoint: String,
}

impl FaceServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let executor = RequestExecutor::new(config.subscription_key)?;
        Ok(Self {
            executor,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Client for the default endpoint
    pub fn with_subscription_key(subscription_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(subscription_key))
    }

    /// Client configured from `FACE_SUBSCRIPTION_KEY` / `FACE_API_ENDPOINT`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        let url = self.url(path);
        let body = self
            .executor
            .request(&url, method, params, &BodyEncoding::Json)
            .await?;
        decode_json(&body, &url)
    }

    /// For operations whose response body carries nothing of interest.
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<()> {
        self.executor
            .request(&self.url(path), method, params, &BodyEncoding::Json)
            .await?;
        Ok(())
    }

    async fn detect(
        &self,
        options: DetectOptions,
        body: Params,
        encoding: BodyEncoding,
    ) -> Result<Vec<Face>> {
        let url = RequestExecutor::build_url(&self.url("/detections"), &detect_query(options))?;
        let response = self
            .executor
            .request(&url, Method::POST, &body, &encoding)
            .await?;
        decode_json(&response, &url)
    }
}

fn detect_query(options: DetectOptions) -> Params {
    Params::new()
        .with("analyzesFacialLandmarks", options.facial_landmarks)
        .with("analyzesAge", options.age)
        .with("analyzesGender", options.gender)
        .with("analyzesHeadPose", options.head_pose)
}

#[async_trait]
impl FaceService for FaceServiceClient {
    async fn detect_url(&self, image_url: &str, options: DetectOptions) -> Result<Vec<Face>> {
        let body = Params::new().with("url", image_url);
        self.detect(options, body, BodyEncoding::Json).await
    }

    async fn detect_image(&self, image: Vec<u8>, options: DetectOptions) -> Result<Vec<Face>> {
        let body = Params::new().with("data", image);
        self.detect(options, body, BodyEncoding::octet_stream()).await
    }

    async fn detect_stream(
        &self,
        mut reader: Box<dyn AsyncRead + Send + Unpin>,
        options: DetectOptions,
    ) -> Result<Vec<Face>> {
        let mut image = Vec::new();
        reader
            .read_to_end(&mut image)
            .await
            .map_err(|e| ClientError::Io {
                message: format!("Failed to read image: {}", e),
            })?;
        debug!("buffered {} image bytes for detection", image.len());
        self.detect_image(image, options).await
    }

    async fn verify(&self, face_id1: Uuid, face_id2: Uuid) -> Result<VerifyResult> {
        let params = Params::new()
            .with("faceId1", face_id1)
            .with("faceId2", face_id2);
        self.send_json(Method::POST, "/verifications", &params).await
    }

    async fn identify(
        &self,
        person_group_id: &str,
        face_ids: &[Uuid],
        max_candidates: u32,
    ) -> Result<Vec<IdentifyResult>> {
        let params = Params::new()
            .with("personGroupId", person_group_id)
            .with("faceIds", face_ids)
            .with("maxNumOfCandidatesReturned", max_candidates);
        self.send_json(Method::POST, "/identifications", &params).await
    }

    async fn find_similar(&self, face_id: Uuid, face_ids: &[Uuid]) -> Result<Vec<SimilarFace>> {
        let params = Params::new()
            .with("faceId", face_id)
            .with("faceIds", face_ids);
        self.send_json(Method::POST, "/findsimilars", &params).await
    }

    async fn group(&self, face_ids: &[Uuid]) -> Result<GroupResult> {
        let params = Params::new().with("faceIds", face_ids);
        self.send_json(Method::POST, "/groupings", &params).await
    }
}
