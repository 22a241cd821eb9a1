use super::face_service::FaceServiceClient;
use super::traits::PersonGroupService;
use crate::Result;
use crate::api::models::{CreatePersonResult, Person, PersonFace, PersonGroup, TrainingStatus};
use crate::api::params::Params;
use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

fn group_path(person_group_id: &str) -> String {
    format!("/persongroups/{}", urlencoding::encode(person_group_id))
}

fn person_path(person_group_id: &str, person_id: Uuid) -> String {
    format!("{}/persons/{}", group_path(person_group_id), person_id)
}

fn person_face_path(person_group_id: &str, person_id: Uuid, face_id: Uuid) -> String {
    format!("{}/faces/{}", person_path(person_group_id, person_id), face_id)
}

fn name_and_user_data(name: &str, user_data: Option<&str>) -> Params {
    let mut params = Params::new().with("name", name);
    params.insert_opt("userData", user_data);
    params
}

#[async_trait]
impl PersonGroupService for FaceServiceClient {
    async fn train_person_group(&self, person_group_id: &str) -> Result<TrainingStatus> {
        let path = format!("{}/training", group_path(person_group_id));
        self.send_json(Method::POST, &path, &Params::new()).await
    }

    async fn get_person_group_training_status(
        &self,
        person_group_id: &str,
    ) -> Result<TrainingStatus> {
        let path = format!("{}/training", group_path(person_group_id));
        self.send_json(Method::GET, &path, &Params::new()).await
    }

    async fn create_person_group(
        &self,
        person_group_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let params = name_and_user_data(name, user_data);
        self.send_empty(Method::PUT, &group_path(person_group_id), &params)
            .await
    }

    async fn delete_person_group(&self, person_group_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &group_path(person_group_id), &Params::new())
            .await
    }

    async fn update_person_group(
        &self,
        person_group_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let params = name_and_user_data(name, user_data);
        self.send_empty(Method::PATCH, &group_path(person_group_id), &params)
            .await
    }

    async fn get_person_group(&self, person_group_id: &str) -> Result<PersonGroup> {
        self.send_json(Method::GET, &group_path(person_group_id), &Params::new())
            .await
    }

    async fn get_person_groups(&self) -> Result<Vec<PersonGroup>> {
        self.send_json(Method::GET, "/persongroups", &Params::new())
            .await
    }

    async fn create_person(
        &self,
        person_group_id: &str,
        face_ids: &[Uuid],
        name: &str,
        user_data: Option<&str>,
    ) -> Result<CreatePersonResult> {
        let path = format!("{}/persons", group_path(person_group_id));
        let mut params = Params::new().with("faceIds", face_ids).with("name", name);
        params.insert_opt("userData", user_data);
        self.send_json(Method::POST, &path, &params).await
    }

    async fn get_person(&self, person_group_id: &str, person_id: Uuid) -> Result<Person> {
        self.send_json(
            Method::GET,
            &person_path(person_group_id, person_id),
            &Params::new(),
        )
        .await
    }

    async fn get_persons(&self, person_group_id: &str) -> Result<Vec<Person>> {
        let path = format!("{}/persons", group_path(person_group_id));
        self.send_json(Method::GET, &path, &Params::new()).await
    }

    async fn update_person(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_ids: &[Uuid],
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let mut params = Params::new().with("faceIds", face_ids).with("name", name);
        params.insert_opt("userData", user_data);
        self.send_empty(
            Method::PATCH,
            &person_path(person_group_id, person_id),
            &params,
        )
        .await
    }

    async fn delete_person(&self, person_group_id: &str, person_id: Uuid) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &person_path(person_group_id, person_id),
            &Params::new(),
        )
        .await
    }

    async fn add_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
        user_data: Option<&str>,
    ) -> Result<()> {
        let mut params = Params::new();
        params.insert_opt("userData", user_data);
        self.send_empty(
            Method::PUT,
            &person_face_path(person_group_id, person_id, face_id),
            &params,
        )
        .await
    }

    async fn get_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
    ) -> Result<PersonFace> {
        self.send_json(
            Method::GET,
            &person_face_path(person_group_id, person_id, face_id),
            &Params::new(),
        )
        .await
    }

    async fn update_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
        user_data: Option<&str>,
    ) -> Result<()> {
        let mut params = Params::new();
        params.insert_opt("userData", user_data);
        self.send_empty(
            Method::PATCH,
            &person_face_path(person_group_id, person_id, face_id),
            &params,
        )
        .await
    }

    async fn delete_person_face(
        &self,
        person_group_id: &str,
        person_id: Uuid,
        face_id: Uuid,
    ) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &person_face_path(person_group_id, person_id, face_id),
            &Params::new(),
        )
        .await
    }
}
