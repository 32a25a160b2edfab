use handcapture::capture::{export, CaptureConfig, Sampler};
use handcapture::core::{Finger, FingerType, Frame, Hand, Handedness, Vec3};
use handcapture::engine::HostClock;

fn right_hand(x: f32) -> Hand {
    Hand {
        id: 7,
        handedness: Handedness::Right,
        palm_position: Vec3::new(x, 0.1, 0.2),
        wrist_position: Vec3::new(x, 0.3, 0.4),
        fingers: std::array::from_fn(|i| {
            Finger::from_joints(
                FingerType::ALL[i],
                Vec3::ZERO,
                std::array::from_fn(|b| Vec3::new(x / 3.0, i as f32 * 0.7, b as f32 * 1.1)),
            )
        }),
    }
}

#[tokio::test]
async fn test_flush_round_trip_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GestureData.csv");
    let mut sampler = Sampler::new(CaptureConfig::default())
        .unwrap()
        .with_output_path(&path);
    let mut clock = HostClock::new();

    for i in 0..25 {
        let frame = Frame::new(i, 0).with_hand(right_hand(i as f32 * 0.37));
        sampler.sample(Some(&frame), &mut clock);
    }
    sampler.flush().await.unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(written.as_bytes(), sampler.buffer().as_str().as_bytes());
    assert_eq!(written.lines().count(), 3 * 22);
}

#[tokio::test]
async fn test_no_frames_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GestureData.csv");
    let mut sampler = Sampler::new(CaptureConfig::default())
        .unwrap()
        .with_output_path(&path);
    let mut clock = HostClock::new();

    for _ in 0..100 {
        sampler.sample(None, &mut clock);
    }
    sampler.flush().await.unwrap();

    let metadata = tokio::fs::metadata(&path).await.unwrap();
    assert_eq!(metadata.len(), 0);
}

#[tokio::test]
async fn test_existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GestureData.csv");
    tokio::fs::write(&path, "stale,data,here\n".repeat(100)).await.unwrap();

    export::write_csv(&path, "1,2,3\n").await.unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(written, "1,2,3\n");
}

#[tokio::test]
async fn test_missing_parent_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("GestureData.csv");

    export::write_csv(&path, "").await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be
    let path = dir.path().join("GestureData.csv");
    std::fs::create_dir(&path).unwrap();

    let result = export::write_csv(&path, "1,2,3\n").await;
    assert!(result.is_err());
}

#[test]
fn test_float_text_is_unrounded() {
    let mut sampler = Sampler::new(CaptureConfig::default()).unwrap();
    let mut clock = HostClock::new();
    let mut hand = right_hand(0.0);
    hand.palm_position = Vec3::new(12.345678, -0.000123, 1e-7);

    sampler.sample(Some(&Frame::new(0, 0).with_hand(hand)), &mut clock);

    let first = sampler.buffer().as_str().lines().next().unwrap();
    assert_eq!(first, format!("{},{},{}", 12.345678f32, -0.000123f32, 1e-7f32));
}

#[test]
fn test_flush_blocking_from_sync_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GestureData.csv");
    let config = CaptureConfig {
        output_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let sampler = Sampler::new(config).unwrap();
    assert_eq!(sampler.output_path(), path.as_path());

    tokio_test::block_on(sampler.flush()).unwrap();
    assert!(path.exists());
}
