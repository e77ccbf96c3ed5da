//! Bundled highway network used to seed a fresh database.
//!
//! Distances are approximate road kilometres along the major national highway
//! connections between Indian cities. Names are already title-cased.

use crate::db::RouteRecord;

/// Seed rows as `(source, destination, distance_km)`.
pub const SEED_ROUTES: &[(&str, &str, f64)] = &[
    // West India and Gujarat
    ("Mumbai", "Pune", 150.0),
    ("Mumbai", "Nagpur", 800.0),
    ("Mumbai", "Ahmedabad", 530.0),
    ("Mumbai", "Surat", 280.0),
    ("Pune", "Nashik", 210.0),
    ("Ahmedabad", "Vadodara", 100.0),
    ("Ahmedabad", "Surat", 260.0),
    ("Ahmedabad", "Rajkot", 215.0),
    ("Ahmedabad", "Bhavnagar", 170.0),
    ("Ahmedabad", "Gandhinagar", 30.0),
    ("Ahmedabad", "Palanpur", 145.0),
    ("Ahmedabad", "Udaipur", 260.0),
    ("Vadodara", "Bharuch", 85.0),
    ("Vadodara", "Rajkot", 290.0),
    ("Surat", "Bharuch", 70.0),
    ("Surat", "Vapi", 120.0),
    ("Surat", "Bhavnagar", 220.0),
    // Saurashtra and Kutch
    ("Rajkot", "Jamnagar", 90.0),
    ("Rajkot", "Junagadh", 100.0),
    ("Rajkot", "Morbi", 70.0),
    ("Rajkot", "Surendranagar", 110.0),
    ("Jamnagar", "Dwarka", 130.0),
    ("Jamnagar", "Porbandar", 100.0),
    ("Bhavnagar", "Veraval", 260.0),
    ("Bhavnagar", "Amreli", 130.0),
    ("Junagadh", "Veraval", 85.0),
    ("Junagadh", "Amreli", 105.0),
    ("Dwarka", "Porbandar", 100.0),
    ("Bhuj", "Kandla", 60.0),
    ("Bhuj", "Gandhidham", 60.0),
    ("Bhuj", "Surendranagar", 260.0),
    ("Kandla", "Morbi", 150.0),
    ("Gandhinagar", "Mehsana", 75.0),
    ("Mehsana", "Patan", 50.0),
    ("Vadodara", "Anand", 40.0),
    ("Anand", "Nadiad", 20.0),
    ("Vadodara", "Godhra", 75.0),
    ("Bharuch", "Dediapada", 90.0),
    ("Valsad", "Vapi", 25.0),
    ("Valsad", "Daman", 15.0),
    // West and central connections
    ("Pune", "Hyderabad", 570.0),
    ("Nagpur", "Raipur", 280.0),
    ("Nagpur", "Bhopal", 390.0),
    ("Indore", "Bhopal", 190.0),
    ("Indore", "Ujjain", 55.0),
    ("Indore", "Jabalpur", 500.0),
    ("Goa", "Belgaum", 150.0),
    ("Mumbai", "Goa", 580.0),
    ("Ahmedabad", "Jaipur", 660.0),
    ("Mumbai", "Jaipur", 1050.0),
    // North India
    ("Delhi", "Jaipur", 270.0),
    ("Delhi", "Agra", 230.0),
    ("Delhi", "Amritsar", 460.0),
    ("Delhi", "Chandigarh", 250.0),
    ("Delhi", "Lucknow", 530.0),
    ("Delhi", "Dehradun", 250.0),
    ("Delhi", "Kanpur", 490.0),
    ("Jaipur", "Jodhpur", 330.0),
    ("Jaipur", "Ajmer", 135.0),
    ("Jaipur", "Kota", 250.0),
    ("Lucknow", "Kanpur", 90.0),
    ("Lucknow", "Varanasi", 320.0),
    ("Agra", "Gwalior", 120.0),
    ("Varanasi", "Patna", 260.0),
    ("Chandigarh", "Ludhiana", 100.0),
    ("Ludhiana", "Amritsar", 145.0),
    ("Amritsar", "Jammu", 200.0),
    ("Jammu", "Srinagar", 290.0),
    ("Srinagar", "Leh", 420.0),
    ("Ambala", "Chandigarh", 50.0),
    ("Ambala", "Delhi", 200.0),
    ("Jalandhar", "Amritsar", 80.0),
    ("Jodhpur", "Bikaner", 250.0),
    ("Bikaner", "Jaipur", 330.0),
    ("Ajmer", "Jodhpur", 200.0),
    ("Gwalior", "Indore", 450.0),
    ("Gwalior", "Kanpur", 280.0),
    ("Haridwar", "Dehradun", 55.0),
    ("Rishikesh", "Haridwar", 25.0),
    ("Lucknow", "Bareilly", 230.0),
    ("Varanasi", "Allahabad", 120.0),
    ("Patna", "Gaya", 100.0),
    ("Patna", "Ranchi", 330.0),
    ("Delhi", "Shimla", 340.0),
    ("Delhi", "Srinagar", 810.0),
    ("Agra", "Mathura", 60.0),
    ("Delhi", "Meerut", 80.0),
    ("Delhi", "Hisar", 170.0),
    // South India
    ("Bengaluru", "Chennai", 350.0),
    ("Bengaluru", "Hyderabad", 575.0),
    ("Bengaluru", "Pune", 830.0),
    ("Bengaluru", "Kochi", 500.0),
    ("Bengaluru", "Mysuru", 150.0),
    ("Bengaluru", "Mangalore", 350.0),
    ("Chennai", "Coimbatore", 500.0),
    ("Chennai", "Madurai", 460.0),
    ("Chennai", "Puducherry", 150.0),
    ("Chennai", "Tiruchirappalli", 330.0),
    ("Hyderabad", "Vijayawada", 270.0),
    ("Hyderabad", "Visakhapatnam", 620.0),
    ("Vijayawada", "Visakhapatnam", 350.0),
    ("Kochi", "Thiruvananthapuram", 200.0),
    ("Coimbatore", "Kochi", 190.0),
    ("Madurai", "Coimbatore", 220.0),
    ("Madurai", "Tiruchirappalli", 135.0),
    ("Pune", "Belgaum", 390.0),
    ("Hyderabad", "Nagpur", 490.0),
    ("Chennai", "Nellore", 170.0),
    ("Coimbatore", "Salem", 170.0),
    ("Salem", "Tiruchirappalli", 140.0),
    ("Visakhapatnam", "Bhubaneswar", 440.0),
    ("Kochi", "Kozhikode", 180.0),
    ("Kozhikode", "Mangalore", 220.0),
    ("Hubballi", "Bengaluru", 400.0),
    ("Hubballi", "Goa", 180.0),
    ("Tiruchirappalli", "Madurai", 135.0),
    ("Kochi", "Coimbatore", 190.0),
    ("Hyderabad", "Warangal", 150.0),
    ("Guntur", "Vijayawada", 35.0),
    ("Tirupati", "Chennai", 150.0),
    ("Tirupati", "Bengaluru", 250.0),
    ("Belgaum", "Hubballi", 90.0),
    // East and central India
    ("Kolkata", "Bhubaneswar", 440.0),
    ("Kolkata", "Patna", 580.0),
    ("Kolkata", "Ranchi", 400.0),
    ("Kolkata", "Guwahati", 1000.0),
    ("Kolkata", "Jamshedpur", 280.0),
    ("Bhubaneswar", "Cuttack", 30.0),
    ("Ranchi", "Jamshedpur", 130.0),
    ("Raipur", "Bhubaneswar", 510.0),
    ("Raipur", "Bilaspur", 115.0),
    ("Raipur", "Jabalpur", 380.0),
    ("Guwahati", "Shillong", 100.0),
    ("Guwahati", "Agartala", 550.0),
    ("Bhopal", "Sagar", 170.0),
    ("Bhopal", "Jabalpur", 330.0),
    ("Raipur", "Nagpur", 280.0),
    ("Bilaspur", "Raipur", 115.0),
    ("Patna", "Muzaffarpur", 80.0),
    ("Jabalpur", "Nagpur", 270.0),
    ("Dhanbad", "Kolkata", 270.0),
    ("Ranchi", "Dhanbad", 170.0),
    // Pan-India corridors
    ("Delhi", "Mumbai", 1400.0),
    ("Kolkata", "Mumbai", 1960.0),
    ("Delhi", "Kolkata", 1500.0),
    ("Bengaluru", "Delhi", 2160.0),
    ("Chennai", "Kolkata", 1660.0),
    ("Bengaluru", "Mumbai", 980.0),
    ("Chennai", "Mumbai", 1250.0),
];

/// Seed network as owned records, ready for graph construction.
pub fn seed_routes() -> Vec<RouteRecord> {
    SEED_ROUTES
        .iter()
        .map(|&(source, destination, distance_km)| {
            RouteRecord::new(source, destination, distance_km)
        })
        .collect()
}
