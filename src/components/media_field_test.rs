use super::*;

#[test]
fn describe_file_formats_size_and_classifies_kind() {
    let meta = describe_file("photo.png", 1536.0, "image/png");
    assert_eq!(meta.name, "photo.png");
    assert_eq!(meta.size_label, "1.5 KB");
    assert_eq!(meta.kind, MediaKind::Image);
    assert_eq!(meta.preview_url, None);
}

#[test]
fn describe_file_marks_videos() {
    let meta = describe_file("clip.mp4", 2.25 * 1024.0 * 1024.0, "video/mp4");
    assert_eq!(meta.size_label, "2.25 MB");
    assert_eq!(meta.kind, MediaKind::Video);
}
