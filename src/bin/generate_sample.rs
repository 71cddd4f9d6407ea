use std::fmt::Write as _;

use anyhow::{Context, Result};

const NULL_VALUE: f64 = -999.25;
const TOP: f64 = 1000.0;
const BOTTOM: f64 = 2000.0;
const STEP: f64 = 0.5;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Volume fraction of shale at `depth`: sand/shale beds a few tens of metres thick.
fn shale_fraction(depth: f64) -> f64 {
    let beds = ((depth - TOP) / 37.0).sin() * 0.5 + ((depth - TOP) / 11.0).sin() * 0.2;
    (0.5 + beds).clamp(0.0, 1.0)
}

/// One synthetic depth step: `[GR, RHOB, NPHI, RT]`.
fn sample(depth: f64, rng: &mut SimpleRng) -> [f64; 4] {
    let vsh = shale_fraction(depth);
    let gr = 20.0 + 110.0 * vsh + rng.gauss(0.0, 4.0);
    let porosity = (0.28 - 0.18 * vsh - (depth - TOP) * 2e-5).max(0.02);
    let rhob = 2.65 * (1.0 - porosity) + 1.0 * porosity + rng.gauss(0.0, 0.015);
    let nphi = porosity + 0.12 * vsh + rng.gauss(0.0, 0.01);
    let rt = (2.0 + 60.0 * (1.0 - vsh).powi(3)) * (1.0 + rng.gauss(0.0, 0.05));
    [gr, rhob, nphi, rt]
}

fn step_count() -> usize {
    ((BOTTOM - TOP) / STEP).round() as usize + 1
}

fn render_las(rng: &mut SimpleRng) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "~VERSION INFORMATION")?;
    writeln!(out, " VERS.                 2.0 : CWLS LOG ASCII STANDARD - VERSION 2.0")?;
    writeln!(out, " WRAP.                  NO : ONE LINE PER DEPTH STEP")?;
    writeln!(out, "~WELL INFORMATION")?;
    writeln!(out, " STRT.M          {TOP:.4} : START DEPTH")?;
    writeln!(out, " STOP.M          {BOTTOM:.4} : STOP DEPTH")?;
    writeln!(out, " STEP.M          {STEP:.4} : STEP")?;
    writeln!(out, " NULL.           {NULL_VALUE} : NULL VALUE")?;
    writeln!(out, " COMP.           SYNTHETIC LOGS LTD : COMPANY")?;
    writeln!(out, " WELL.           SAMPLE-1 : WELL")?;
    writeln!(out, " FLD .           DEMO FIELD : FIELD")?;
    writeln!(out, "~CURVE INFORMATION")?;
    writeln!(out, " DEPT.M                    : MEASURED DEPTH")?;
    writeln!(out, " GR  .GAPI                 : GAMMA RAY")?;
    writeln!(out, " RHOB.G/C3                 : BULK DENSITY")?;
    writeln!(out, " NPHI.V/V                  : NEUTRON POROSITY")?;
    writeln!(out, " RT  .OHMM                 : TRUE RESISTIVITY")?;
    writeln!(out, "~A  DEPT        GR        RHOB      NPHI      RT")?;

    for i in 0..step_count() {
        let depth = TOP + i as f64 * STEP;
        let mut values = sample(depth, rng);
        // A short tool dropout on the resistivity curve.
        if (1402..1410).contains(&i) {
            values[3] = NULL_VALUE;
        }
        write!(out, "{depth:<10.2}")?;
        for v in values {
            write!(out, "{v:>10.4}")?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let text = render_las(&mut rng)?;

    let output_path = "sample_log.las";
    std::fs::write(output_path, &text).with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} depth steps ({TOP}–{BOTTOM} m, curves GR RHOB NPHI RT) to {output_path}",
        step_count()
    );
    Ok(())
}
