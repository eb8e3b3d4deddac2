//! Campus seed data.
//!
//! Ten buildings of the Xavier University of Louisiana campus, plus three
//! distant cities so the haversine weights span metres to thousands of
//! kilometres.

use std::io::Cursor;

use cg_graph::{GraphResult, GraphStore, load_buildings_reader};

const BUILDINGS_CSV: &str = "\
name,latitude,longitude\n\
Admin,29.964440282121426,-90.10699538972723\n\
Chapel,29.96593408811449,-90.1064650276058\n\
Library,29.96599544988278,-90.10716232208914\n\
U_Center,29.964703488401312,-90.10535987770028\n\
Pharmacy,29.96578980910307,-90.10667462208916\n\
St_Joseph,29.963506522473068,-90.10636098690512\n\
St_Michael,29.96477061529604,-90.10569579909495\n\
Xavier_S,29.961747090734512,-90.10206360674651\n\
Convo_Ctr,29.964097325222845,-90.10923296221479\n\
DP,29.96168994182377,-90.10292977127155\n\
New_Orleans,29.9547,-90.0751\n\
Abuja,9.084576,7.483333\n\
Harare,-17.824858,31.053028\n";

/// Load the 13 seed buildings.  The returned store has no edges.
pub fn load_campus() -> GraphResult<GraphStore> {
    load_buildings_reader(Cursor::new(BUILDINGS_CSV))
}
