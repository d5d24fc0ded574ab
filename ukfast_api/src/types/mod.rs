mod envelope;
pub use self::envelope::{
    ClientResponse, Pagination, PaginationLinks, RawResponse, ResponseBody, ResponseError,
    ResponseMeta,
};
