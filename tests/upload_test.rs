mod common;

#[cfg(test)]
mod tests {
    use super::common::init_test_logging;
    use cloudnix_onboard::config::OnboardConfig;
    use cloudnix_onboard::wizard::upload::{
        decode_data_url, declared_type_for, encode_data_url, UploadBox, UPLOAD_SUCCESS_CAPTION,
    };
    use cloudnix_onboard::wizard::{DragEvent, FileCandidate, StepController};
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_declared_type_by_extension() {
        assert_eq!(declared_type_for(Path::new("photo.PNG")), Some("image/png"));
        assert_eq!(declared_type_for(Path::new("a/b/pic.jpeg")), Some("image/jpeg"));
        assert_eq!(declared_type_for(Path::new("logo.svg")), Some("image/svg+xml"));
        assert_eq!(declared_type_for(Path::new("notes.txt")), Some("text/plain"));
        assert_eq!(declared_type_for(Path::new("README")), None);
    }

    #[test]
    fn test_non_image_is_ignored() {
        init_test_logging();
        let mut upload = UploadBox::new();

        assert!(upload.accept(FileCandidate::from_path("report.pdf")).is_none());
        assert!(upload.accept(FileCandidate::new("blob", None)).is_none());
        assert!(upload
            .accept(FileCandidate::new("fake.png", Some("text/plain")))
            .is_none());

        assert!(upload.pending().is_none());
        assert!(upload.preview().is_none());
    }

    #[test]
    fn test_declared_type_wins_over_extension() {
        let mut upload = UploadBox::new();
        let file = FileCandidate::new("scan.bin", Some("image/tiff"));
        assert_eq!(upload.accept(file.clone()), Some(file));
    }

    #[test]
    fn test_drag_hover_state() {
        let mut upload = UploadBox::new();

        assert!(upload.on_drag(DragEvent::Enter).is_none());
        assert!(upload.is_hovered());
        upload.on_drag(DragEvent::Leave);
        assert!(!upload.is_hovered());

        upload.on_drag(DragEvent::Enter);
        let accepted = upload.on_drag(DragEvent::Drop(FileCandidate::from_path("cat.gif")));
        assert!(!upload.is_hovered());
        assert_eq!(accepted.unwrap().declared_type.as_deref(), Some("image/gif"));
    }

    #[test]
    fn test_drop_of_non_image_clears_hover() {
        let mut upload = UploadBox::new();
        upload.on_drag(DragEvent::Enter);

        assert!(upload
            .on_drag(DragEvent::Drop(FileCandidate::from_path("archive.zip")))
            .is_none());
        assert!(!upload.is_hovered());
    }

    #[test]
    fn test_finish_installs_preview() {
        let mut upload = UploadBox::new();
        upload.accept(FileCandidate::from_path("/tmp/cat.png"));

        assert!(upload.finish(Path::new("/tmp/cat.png"), "data:image/png;base64,AA==".to_string(), 1));
        let preview = upload.preview().unwrap();
        assert_eq!(preview.file_name, "cat.png");
        assert_eq!(preview.mime, "image/png");
        assert_eq!(preview.caption, UPLOAD_SUCCESS_CAPTION);
        assert!(upload.pending().is_none());
    }

    #[test]
    fn test_superseded_decode_is_discarded() {
        let mut upload = UploadBox::new();
        upload.accept(FileCandidate::from_path("first.png"));
        upload.accept(FileCandidate::from_path("second.png"));

        assert!(!upload.finish(Path::new("first.png"), "data:image/png;base64,".to_string(), 0));
        assert!(upload.preview().is_none());
        assert!(upload.finish(Path::new("second.png"), "data:image/png;base64,".to_string(), 0));
        assert_eq!(upload.preview().unwrap().file_name, "second.png");
    }

    #[test]
    fn test_failed_decode_keeps_previous_preview() {
        let mut upload = UploadBox::new();
        upload.accept(FileCandidate::from_path("old.png"));
        upload.finish(Path::new("old.png"), "data:image/png;base64,".to_string(), 0);

        upload.accept(FileCandidate::from_path("missing.png"));
        upload.fail(Path::new("missing.png"), "not found");

        assert!(upload.pending().is_none());
        assert_eq!(upload.preview().unwrap().file_name, "old.png");
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(encode_data_url("image/gif", b""), "data:image/gif;base64,");
    }

    #[tokio::test]
    async fn test_decode_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pixel.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = FileCandidate::from_path(&path);
        let (data_url, byte_len) = decode_data_url(&file).await.unwrap();

        assert_eq!(byte_len, 4);
        assert_eq!(data_url, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_decode_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = FileCandidate::from_path(temp_dir.path().join("gone.png"));

        let err = decode_data_url(&file).await.unwrap_err();
        assert!(err.to_string().contains("gone.png"));
    }

    #[tokio::test]
    async fn test_controller_picker_flow() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product.jpg");
        std::fs::write(&path, b"jpeg-bytes").unwrap();

        let mut controller = StepController::new(OnboardConfig::default());
        let file = controller.pick_file(FileCandidate::from_path(&path)).unwrap();
        assert!(controller.upload().pending().is_some());

        let (data_url, byte_len) = decode_data_url(&file).await.unwrap();
        assert!(controller.image_decoded(&file.path, data_url, byte_len));

        let preview = controller.upload().preview().unwrap();
        assert_eq!(preview.file_name, "product.jpg");
        assert_eq!(preview.byte_len, 10);
        assert!(preview.data_url.starts_with("data:image/jpeg;base64,"));
    }
}
