//! # 홀로그램 수신자
//!
//! 프레임마다 완성된 홀로그램 하나를 받는다. 파일 이름이나 영상 인코딩은 수신자 몫이다.

use anyhow::{Context, Result};
use ndarray::{Array2, ArrayView2};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub trait HologramSink {
    fn accept(&mut self, index: usize, holo: &Array2<u8>) -> Result<()>;
}

/// 메모리에 모으는 수신자
#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<(usize, Array2<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HologramSink for MemorySink {
    fn accept(&mut self, index: usize, holo: &Array2<u8>) -> Result<()> {
        self.frames.push((index, holo.clone()));
        Ok(())
    }
}

/// 디렉터리에 `<prefix>-NNN.pgm`으로 쓰는 수신자
#[derive(Debug, Clone)]
pub struct PgmDirSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PgmDirSink {
    pub fn new<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("출력 디렉터리 생성 실패: {}", dir.display()))?;
        Ok(Self {
            dir,
            prefix: prefix.to_string(),
            written: Vec::new(),
        })
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}-{:03}.pgm", self.prefix, index))
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl HologramSink for PgmDirSink {
    fn accept(&mut self, index: usize, holo: &Array2<u8>) -> Result<()> {
        let path = self.frame_path(index);
        write_pgm(&path, holo.view())?;
        self.written.push(path);
        Ok(())
    }
}

/// 이진 PGM(P5) 8비트 회색조 이미지 쓰기
pub fn write_pgm<P: AsRef<Path>>(path: P, image: ArrayView2<u8>) -> Result<()> {
    let path = path.as_ref();
    let (rows, cols) = image.dim();
    let file = File::create(path).with_context(|| format!("파일 생성 실패: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write!(writer, "P5\n{} {}\n255\n", cols, rows)?;
    let pixels: Vec<u8> = image.iter().copied().collect();
    writer.write_all(&pixels)?;
    writer.flush()?;
    Ok(())
}
