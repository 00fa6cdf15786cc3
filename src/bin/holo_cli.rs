use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use wgs_holo::core::batch::write_pgm;
use wgs_holo::core::hologram::{reconstruct, rotate_clockwise};
use wgs_holo::core::target::{dot_grid, gaussian_spot, DotGrid, SpotPath, DEFAULT_BINARIZE_THRESHOLD};
use wgs_holo::{FrameProcessor, GsConfig, HologramSink, IterationController, PgmDirSink, TargetPattern, TerminalState};

fn main() {
    env_logger::init();

    let matches = Command::new("holo_cli")
        .version("0.1.0")
        .about("가중 GS 알고리즘 위상 홀로그램 계산 도구")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .global(true)
                .help("JSON 구성 파일 (생략 시 기본값)"),
        )
        .arg(
            Arg::new("max-iter")
                .long("max-iter")
                .value_name("N")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("최대 반복 수"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("U")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("균일도 목표 [0, 1]"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("초기 위상 난수 시드"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("COUNT")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("rayon 스레드 수 (기본: CPU 코어 수)"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("DIR")
                .global(true)
                .default_value("./out")
                .help("출력 디렉터리"),
        )
        .subcommand(
            Command::new("grid")
                .about("점 격자 목표로 홀로그램 한 장 계산")
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .value_parser(value_parser!(usize))
                        .default_value("1080"),
                )
                .arg(
                    Arg::new("cols")
                        .long("cols")
                        .value_parser(value_parser!(usize))
                        .default_value("1920"),
                )
                .arg(
                    Arg::new("margin")
                        .long("margin")
                        .value_parser(value_parser!(usize))
                        .default_value("50"),
                )
                .arg(
                    Arg::new("spacing")
                        .long("spacing")
                        .value_parser(value_parser!(usize))
                        .default_value("100"),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .value_parser(value_parser!(usize))
                        .default_value("2"),
                )
                .arg(
                    Arg::new("rotate")
                        .long("rotate")
                        .action(ArgAction::SetTrue)
                        .help("패널 방향에 맞춰 시계 방향 90° 회전"),
                ),
        )
        .subcommand(
            Command::new("spot")
                .about("중심으로 이동하는 가우시안 스폿 영상을 프레임 단위로 처리")
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_parser(value_parser!(usize))
                        .default_value("256"),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    Arg::new("step")
                        .long("step")
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .default_value("point")
                        .help("출력 파일 접두사"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("grid", sub_matches)) => handle_grid(sub_matches),
        Some(("spot", sub_matches)) => handle_spot(sub_matches),
        _ => {
            eprintln!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ 오류: {:#}", e);
        process::exit(1);
    }
}

/// 단일 홀로그램 보고서
#[derive(Debug, Serialize)]
struct GridReport {
    rows: usize,
    cols: usize,
    iterations: usize,
    uniformity: f64,
    efficiency: f64,
    terminal: TerminalState,
    duration_secs: f64,
    history: Vec<f64>,
    config: GsConfig,
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> Result<T> {
    matches
        .get_one::<T>(name)
        .cloned()
        .ok_or_else(|| anyhow!("인자 누락: --{}", name))
}

/// 구성 파일 + 명령행 덮어쓰기
fn load_config(matches: &ArgMatches) -> Result<GsConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => GsConfig::from_json_file(path)?,
        None => GsConfig::default(),
    };
    if let Some(&max_iter) = matches.get_one::<usize>("max-iter") {
        config = config.with_max_iterations(max_iter);
    }
    if let Some(&threshold) = matches.get_one::<f64>("threshold") {
        config = config.with_uniformity_threshold(threshold);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn setup_threads(matches: &ArgMatches) {
    let threads = matches
        .get_one::<usize>("threads")
        .copied()
        .unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap_or_else(|_| {
            log::warn!("rayon 스레드 풀 설정 실패, 기본값 사용");
        });
}

fn output_dir(matches: &ArgMatches) -> Result<PathBuf> {
    let dir = PathBuf::from(required::<String>(matches, "out")?);
    fs::create_dir_all(&dir).with_context(|| format!("출력 디렉터리 생성 실패: {}", dir.display()))?;
    Ok(dir)
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d%H%M%S").to_string()
}

fn handle_grid(matches: &ArgMatches) -> Result<()> {
    // 전역 인자는 하위 명령 매치로 전파됨
    setup_threads(matches);
    let config = load_config(matches)?;
    let out = output_dir(matches)?;

    let margin = required::<usize>(matches, "margin")?;
    let spacing = required::<usize>(matches, "spacing")?;
    let grid = DotGrid {
        rows: required(matches, "rows")?,
        cols: required(matches, "cols")?,
        margin: (margin, margin),
        spacing: (spacing, spacing),
        radius: required(matches, "radius")?,
    };

    println!("🎯 점 격자 목표: {}×{}, 간격 {}, 반지름 {}", grid.rows, grid.cols, spacing, grid.radius);
    let frame = dot_grid(&grid)?;
    let target = TargetPattern::from_gray_frame(frame.view(), DEFAULT_BINARIZE_THRESHOLD, config.mask_policy)?;
    println!("   선택 픽셀: {}", target.selected_count());

    let started = Instant::now();
    let controller = IterationController::new(config.clone())?;
    let outcome = controller.run(&target)?;
    let duration = started.elapsed().as_secs_f64();

    let mut holo = outcome.hologram()?;
    if matches.get_flag("rotate") {
        holo = rotate_clockwise(holo.view());
    }
    let efficiency = outcome.efficiency(&target)?;
    let uniformity = outcome.final_uniformity().unwrap_or(f64::NAN);

    let stem = format!("grid-{}-unif{:.4}", timestamp(), uniformity);
    write_pgm(out.join(format!("{}.pgm", stem)), holo.view())?;
    write_pgm(out.join(format!("{}-rec.pgm", stem)), reconstruct(outcome.norm_intensity.view()).view())?;

    let report = GridReport {
        rows: grid.rows,
        cols: grid.cols,
        iterations: outcome.iterations(),
        uniformity,
        efficiency,
        terminal: outcome.terminal,
        duration_secs: duration,
        history: outcome.history.clone(),
        config,
    };
    write_report(&out.join(format!("{}.json", stem)), &report)?;

    println!("\n🏆 계산 완료 ({:?})", outcome.terminal);
    println!("   반복: {}", report.iterations);
    println!("   소요 시간: {:.2}s", duration);
    println!("   균일도: {:.4}", uniformity);
    println!("   효율: {:.4}", efficiency);
    println!("   출력: {}", out.join(format!("{}.pgm", stem)).display());
    Ok(())
}

/// 진행 막대를 갱신하며 PGM 파일로 넘기는 수신자
struct ProgressSink {
    inner: PgmDirSink,
    bar: ProgressBar,
}

impl HologramSink for ProgressSink {
    fn accept(&mut self, index: usize, holo: &ndarray::Array2<u8>) -> Result<()> {
        self.inner.accept(index, holo)?;
        self.bar.inc(1);
        Ok(())
    }
}

fn handle_spot(matches: &ArgMatches) -> Result<()> {
    // 전역 인자는 하위 명령 매치로 전파됨
    setup_threads(matches);
    let config = load_config(matches)?;
    let out = output_dir(matches)?;

    let size = required::<usize>(matches, "size")?;
    let radius = required::<usize>(matches, "radius")?;
    let step = required::<usize>(matches, "step")?;
    let name = required::<String>(matches, "name")?;

    let positions: Vec<(usize, usize)> = SpotPath::new((radius, radius), size, size, step).collect();
    let frames = positions
        .iter()
        .map(|&center| gaussian_spot(size, size, center, radius))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    println!("🎞️ 스폿 프레임 {}장 ({}×{})", frames.len(), size, size);

    let bar = ProgressBar::new(frames.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} 프레임 ({elapsed_precise})")
            .map_err(|e| anyhow!("진행 막대 템플릿 오류: {}", e))?,
    );
    let frame_dir = out.join(format!("{}-{}", name, timestamp()));
    let mut sink = ProgressSink {
        inner: PgmDirSink::new(&frame_dir, &name)?,
        bar,
    };

    let mut processor = FrameProcessor::new(config, DEFAULT_BINARIZE_THRESHOLD)?;
    let summary = processor.process(frames, &mut sink);
    sink.bar.finish();

    write_report(&frame_dir.join("summary.json"), &summary)?;

    println!("\n🏆 처리 완료: 성공 {} / 실패 {}", summary.succeeded(), summary.failed());
    if let Some(mean) = summary.mean_uniformity() {
        println!("   평균 균일도: {:.4}", mean);
    }
    println!("   출력: {}", frame_dir.display());
    Ok(())
}

fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(report)?;
    fs::write(path, text).with_context(|| format!("보고서 저장 실패: {}", path.display()))?;
    Ok(())
}
