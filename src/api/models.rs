use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// Detection models
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    pub face_id: Uuid,
    pub face_rectangle: FaceRectangle,
    pub face_landmarks: Option<FaceLandmarks>,
    pub attributes: Option<FaceAttributes>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct FaceRectangle {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct FeatureCoordinate {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaceLandmarks {
    pub pupil_left: Option<FeatureCoordinate>,
    pub pupil_right: Option<FeatureCoordinate>,
    pub nose_tip: Option<FeatureCoordinate>,
    pub mouth_left: Option<FeatureCoordinate>,
    pub mouth_right: Option<FeatureCoordinate>,
    pub eyebrow_left_outer: Option<FeatureCoordinate>,
    pub eyebrow_left_inner: Option<FeatureCoordinate>,
    pub eye_left_outer: Option<FeatureCoordinate>,
    pub eye_left_top: Option<FeatureCoordinate>,
    pub eye_left_bottom: Option<FeatureCoordinate>,
    pub eye_left_inner: Option<FeatureCoordinate>,
    pub eyebrow_right_inner: Option<FeatureCoordinate>,
    pub eyebrow_right_outer: Option<FeatureCoordinate>,
    pub eye_right_inner: Option<FeatureCoordinate>,
    pub eye_right_top: Option<FeatureCoordinate>,
    pub eye_right_bottom: Option<FeatureCoordinate>,
    pub eye_right_outer: Option<FeatureCoordinate>,
    pub nose_root_left: Option<FeatureCoordinate>,
    pub nose_root_right: Option<FeatureCoordinate>,
    pub nose_left_alar_top: Option<FeatureCoordinate>,
    pub nose_right_alar_top: Option<FeatureCoordinate>,
    pub nose_left_alar_out_tip: Option<FeatureCoordinate>,
    pub nose_right_alar_out_tip: Option<FeatureCoordinate>,
    pub upper_lip_top: Option<FeatureCoordinate>,
    pub upper_lip_bottom: Option<FeatureCoordinate>,
    pub under_lip_top: Option<FeatureCoordinate>,
    pub under_lip_bottom: Option<FeatureCoordinate>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaceAttributes {
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub head_pose: Option<HeadPose>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct HeadPose {
    pub roll: f64,
    pub yaw: f64,
    pub pitch: f64,
}

/// Attribute flags sent as query parameters on detection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DetectOptions {
    pub facial_landmarks: bool,
    pub age: bool,
    pub gender: bool,
    pub head_pose: bool,
}

impl DetectOptions {
    pub fn all() -> Self {
        Self {
            facial_landmarks: true,
            age: true,
            gender: true,
            head_pose: true,
        }
    }
}

// Recognition models
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResult {
    pub is_identical: bool,
    pub confidence: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResult {
    pub face_id: Uuid,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub person_id: Uuid,
    pub confidence: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarFace {
    pub face_id: Uuid,
    pub confidence: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupResult {
    #[serde(default)]
    pub groups: Vec<Vec<Uuid>>,
    #[serde(default)]
    pub messy_group: Vec<Uuid>,
}

// Training models
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrainingState {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

/// Custom deserializer: the service spells states in varying case, unknown states map to Unknown
impl<'de> Deserialize<'de> for TrainingState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.to_ascii_lowercase().as_str() {
            "notstarted" => TrainingState::NotStarted,
            "running" => TrainingState::Running,
            "succeeded" => TrainingState::Succeeded,
            "failed" => TrainingState::Failed,
            _ => TrainingState::Unknown,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    pub status: TrainingState,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

// Person group models
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonGroup {
    pub person_group_id: String,
    pub name: String,
    pub user_data: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: Uuid,
    #[serde(default)]
    pub face_ids: Vec<Uuid>,
    pub name: String,
    pub user_data: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonFace {
    pub face_id: Uuid,
    pub user_data: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonResult {
    pub person_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_deserialization_with_attributes() {
        let json = r#"[{
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "faceRectangle": {"width": 78, "height": 78, "left": 394, "top": 54},
            "faceLandmarks": {
                "pupilLeft": {"x": 412.7, "y": 78.4},
                "pupilRight": {"x": 446.8, "y": 74.2},
                "noseTip": {"x": 437.7, "y": 92.4}
            },
            "attributes": {
                "age": 71.0,
                "gender": "male",
                "headPose": {"roll": -32.9, "yaw": 22.9, "pitch": 0.0}
            }
        }]"#;

        let faces: Vec<Face> = serde_json::from_str(json).unwrap();
        assert_eq!(faces.len(), 1);
        let face = &faces[0];
        assert_eq!(
            face.face_id.to_string(),
            "c5c24a82-6845-4031-9d5d-978df9175426"
        );
        assert_eq!(face.face_rectangle.left, 394);
        let landmarks = face.face_landmarks.as_ref().unwrap();
        assert_eq!(landmarks.pupil_left.unwrap().x, 412.7);
        assert!(landmarks.under_lip_bottom.is_none());
        let attributes = face.attributes.as_ref().unwrap();
        assert_eq!(attributes.gender.as_deref(), Some("male"));
        assert_eq!(attributes.head_pose.unwrap().roll, -32.9);
    }

    #[test]
    fn test_face_without_optional_sections() {
        let json = r#"{
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "faceRectangle": {"width": 1, "height": 2, "left": 3, "top": 4}
        }"#;
        let face: Face = serde_json::from_str(json).unwrap();
        assert!(face.face_landmarks.is_none());
        assert!(face.attributes.is_none());
    }

    #[test]
    fn test_training_state_is_case_insensitive() {
        let status: TrainingStatus = serde_json::from_str(
            r#"{"status": "Succeeded", "startTime": "1/3/2015 2:58:09 PM", "endTime": "1/3/2015 2:58:20 PM"}"#,
        )
        .unwrap();
        assert_eq!(status.status, TrainingState::Succeeded);
        assert_eq!(status.end_time.as_deref(), Some("1/3/2015 2:58:20 PM"));

        let status: TrainingStatus = serde_json::from_str(r#"{"status": "notstarted"}"#).unwrap();
        assert_eq!(status.status, TrainingState::NotStarted);

        let status: TrainingStatus = serde_json::from_str(r#"{"status": "queued"}"#).unwrap();
        assert_eq!(status.status, TrainingState::Unknown);
    }

    #[test]
    fn test_identify_result_deserialization() {
        let json = r#"[{
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "candidates": [
                {"personId": "25985303-c537-4467-b41d-bdb45cd95ca1", "confidence": 0.92}
            ]
        }, {
            "faceId": "65d083d4-9447-47d1-af30-b626144bf0fb"
        }]"#;
        let results: Vec<IdentifyResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results[0].candidates.len(), 1);
        assert_eq!(results[0].candidates[0].confidence, 0.92);
        assert!(results[1].candidates.is_empty());
    }

    #[test]
    fn test_group_result_deserialization() {
        let json = r#"{
            "groups": [[
                "c5c24a82-6845-4031-9d5d-978df9175426",
                "015839fb-fbd9-4f79-ace9-7675fc2f1dd9"
            ]],
            "messyGroup": ["be386ab3-af91-4104-9e6d-4dae4c9fddb7"]
        }"#;
        let result: GroupResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].len(), 2);
        assert_eq!(result.messy_group.len(), 1);
    }

    #[test]
    fn test_person_deserialization() {
        let json = r#"{
            "personId": "25985303-c537-4467-b41d-bdb45cd95ca1",
            "faceIds": ["c5c24a82-6845-4031-9d5d-978df9175426"],
            "name": "Ryan",
            "userData": "User-provided data attached to the person"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Ryan");
        assert_eq!(person.face_ids.len(), 1);
        assert!(person.user_data.is_some());
    }

    #[test]
    fn test_detect_options() {
        let options = DetectOptions::default();
        assert!(!options.facial_landmarks && !options.age && !options.gender && !options.head_pose);
        let options = DetectOptions::all();
        assert!(options.facial_landmarks && options.age && options.gender && options.head_pose);
    }
}
