use super::types::{Catalog, SatelliteRecord};

/// Satellites requested by the fetcher, in request order.
pub const NORAD_IDS: [u32; 10] = [
    28874, 25544, 25338, 858, 39199, 36112, 33401, 39197, 25560, 22824,
];

const EMBEDDED_TLES: [(u32, &str, &str, &str); 10] = [
    (
        28874,
        "USA 181",
        "1 28874U 05042A   24234.33562962  .00000046  00000-0  00000-0 0  9991",
        "2 28874   0.0173  88.9936 0001184  45.6725 314.4523  1.00271211 72240",
    ),
    (
        25544,
        "ISS (ZARYA)",
        "1 25544U 98067A   24234.51762566  .00013953  00000-0  25266-3 0  9998",
        "2 25544  51.6411  39.2543 0005177  94.4421 325.7228 15.49917990552858",
    ),
    (
        25338,
        "IRIDIUM 33",
        "1 25338U 98030A   24234.42050168  .00000134  00000-0  53715-4 0  9995",
        "2 25338  86.3983 211.1087 0002197  84.2379 275.9060 14.34215473285493",
    ),
    (
        858,
        "SEASAT 1",
        "1 00858U 76064A   24234.27037094  .00000063  00000-0  00000-0 0  9990",
        "2 00858 108.0033 322.6901 0003344 172.6571 187.4758 13.96037743249079",
    ),
    (
        39199,
        "COSMOS 2481",
        "1 39199U 13018A   24234.35673265  .00000078  00000-0  00000-0 0  9991",
        "2 39199  82.4761 268.6791 0013804 319.8972  40.1401 12.43015611517316",
    ),
    (
        36112,
        "COSMOS 2469",
        "1 36112U 09072A   24234.34890410 -.00000007  00000-0  00000-0 0  9993",
        "2 36112  67.1504 219.2729 0005559  92.7793 267.4201 12.87870826444835",
    ),
    (
        33401,
        "TERRA SAR-X",
        "1 33401U 08026A   24234.36498304  .00000012  00000-0  00000-0 0  9992",
        "2 33401  97.4471  41.6390 0001267 117.1127 242.9946 15.11966790748004",
    ),
    (
        39197,
        "COSMOS 2480",
        "1 39197U 13017A   24234.32517136  .00000066  00000-0  00000-0 0  9996",
        "2 39197  82.4803  89.0935 0014615  44.1765 316.0496 12.43010836517307",
    ),
    (
        25560,
        "NOAA 15",
        "1 25560U 98030A   24234.36247698  .00000093  00000-0  82172-4 0  9994",
        "2 25560  98.7105 238.2810 0011862  43.8911 316.3239 14.25943725285530",
    ),
    (
        22824,
        "COSMOS 2335",
        "1 22824U 93061A   24234.33950139  .00000049  00000-0  00000-0 0  9998",
        "2 22824  64.5568 126.3526 0012172  77.2059 283.0695 13.55836291497840",
    ),
];

/// Built-in element sets used by the visualizer when no TLE file is configured.
pub fn embedded_catalog() -> Catalog {
    EMBEDDED_TLES
        .iter()
        .map(|(id, name, line1, line2)| SatelliteRecord::new(*id, name, line1, line2))
        .collect()
}
