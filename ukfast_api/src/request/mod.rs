mod parameters;
pub use self::parameters::{
    ClientRequestParameters, FilterOperator, FilteringParameter, PaginationParameters,
    SortingParameters,
};
