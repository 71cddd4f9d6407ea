//! LAS documents shared by the unit tests.

/// Depth 1000–2000 m in 250 m steps, four curves, one NULL sample in `RT`.
pub const SAMPLE_LAS: &str = "\
~VERSION INFORMATION
 VERS.                  2.0 :   CWLS LOG ASCII STANDARD - VERSION 2.0
 WRAP.                   NO :   ONE LINE PER DEPTH STEP
~WELL INFORMATION
#MNEM.UNIT      DATA                 DESCRIPTION
 STRT.M         1000.0             : START DEPTH
 STOP.M         2000.0             : STOP DEPTH
 STEP.M         250.0              : STEP
 NULL.          -999.25            : NULL VALUE
 COMP.          DEMO OPERATING CO. : COMPANY
 WELL.          DEMO-1             : WELL
~CURVE INFORMATION
 DEPT.M                            : MEASURED DEPTH
 GR  .GAPI                         : GAMMA RAY
 RHOB.G/C3                         : BULK DENSITY
 NPHI.V/V                          : NEUTRON POROSITY
 RT  .OHMM                         : TRUE RESISTIVITY
~PARAMETER INFORMATION
 BHT .DEGC      85.0               : BOTTOM HOLE TEMPERATURE
~OTHER
 Synthetic log for viewer tests.
~A  DEPT     GR      RHOB    NPHI    RT
1000.0   45.2    2.45    0.21    12.5
1250.0   60.8    2.38    0.25    8.1
1500.0   88.1    2.51    0.18    -999.25
1750.0   72.4    2.40    0.23    20.3
2000.0   55.0    2.47    0.20    15.7
";

/// Same layout as [`SAMPLE_LAS`] but with only two curves.
pub const TWO_CURVE_LAS: &str = "\
~V
 VERS. 2.0 :
~C
 DEPT.FT :
 GR.GAPI :
 CALI.IN :
~A
500.0 40.0 8.5
500.5 42.0 8.6
501.0 41.0 8.4
";
